//! A compact, restrictive FAT32 driver for resource-constrained hosts.
//!
//! Exactly one FAT, one sector per cluster, short 8.3 names, files living
//! in the root directory only. [`Fat32`] owns a block device, a clock, the
//! single shared 512-byte sector buffer, and a fixed-size open-file table
//! sized by the `N` const generic — no heap, no locking, single caller at
//! a time.
//!
//! Walk the five components leaves-first: [`block_device`] adapts the raw
//! device, [`mbr`] (behind the `partition` feature) and [`bpb`] parse the
//! on-disk metadata, [`fat`] is the cluster-chain allocator, [`dir`] is the
//! root directory manager, and this module drives all of them from
//! `open`/`read`/`write`/`seek`/`close`.

#![cfg_attr(not(test), no_std)]

#[cfg(not(any(feature = "read", feature = "write", feature = "append")))]
compile_error!("at least one of the `read`, `write`, or `append` features must be enabled");

#[cfg(all(feature = "modify", not(feature = "write")))]
compile_error!("the `modify` feature requires `write`");

#[cfg(all(any(feature = "append", feature = "modify"), not(feature = "seek-tell")))]
compile_error!("the `append` and `modify` features require `seek-tell`");

pub mod block_device;
pub mod bpb;
pub mod clock;
pub mod dir;
pub mod fat;
pub mod file;
#[cfg(feature = "partition")]
pub mod mbr;

use block_device::{BlockDevice, BlockIo};
use bpb::{FsInfoState, Geometry, MountError};
use clock::ClockProvider;
use dir::{DirEntryLocation, ShortName};
use fat::NoSpace;
use file::{CloseError, FileHandle, FileMode, OpenError, OpenFile, ReadError, SeekError, WriteError};

use log::{debug, trace, warn};

/// The fixed sector size this driver assumes throughout.
pub const SECTOR_SIZE: usize = 512;

/// Sentinel passed to [`Fat32::seek`] meaning "seek to end of file".
pub const SEEK_END: u32 = 0xFFFF_FFFF;

/// The driver. `D` is the block provider, `C` the clock provider, `N` the
/// maximum number of simultaneously open files.
pub struct Fat32<D: BlockDevice, C: ClockProvider, const N: usize> {
    io: BlockIo<D>,
    clock: C,
    buf: [u8; SECTOR_SIZE],
    geometry: Geometry,
    fsinfo: FsInfoState,
    open_files: [Option<OpenFile>; N],
}

impl<D: BlockDevice, C: ClockProvider, const N: usize> Fat32<D, C, N> {
    /// Mounts the volume at volume-relative sector 0. `N` must be at least
    /// 1 — `Fat32<D, C, 0>` has no usable open-file slots and cannot be
    /// constructed meaningfully, but nothing below the type system stops
    /// it; callers choosing `N = 0` will simply always see `NoFreeSlot`.
    pub fn mount(device: D, clock: C) -> Result<Self, MountError> {
        let mut io = BlockIo::new(device);
        let mut buf = [0u8; SECTOR_SIZE];
        let (geometry, fsinfo) = bpb::mount(&mut io, &mut buf)?;
        debug!(
            "mounted: root_cluster={} free_sectors={}",
            geometry.root_cluster, fsinfo.free_sector_count
        );
        Ok(Self {
            io,
            clock,
            buf,
            geometry,
            fsinfo,
            open_files: [None; N],
        })
    }

    /// Selects MBR partition `index` and re-mounts the volume at its start
    /// LBA. Only available with the `partition` feature.
    #[cfg(feature = "partition")]
    pub fn set_partition(device: D, clock: C, index: u8) -> Result<Self, PartitionOrMountError> {
        let mut io = BlockIo::new(device);
        let mut sector0 = [0u8; SECTOR_SIZE];
        io.read_physical_sector(0, &mut sector0);
        let start_lba = mbr::read_partition_start_lba(&sector0, index)
            .map_err(PartitionOrMountError::Partition)?;
        io.partition_start_lba = start_lba;

        let mut buf = [0u8; SECTOR_SIZE];
        let (geometry, fsinfo) =
            bpb::mount(&mut io, &mut buf).map_err(PartitionOrMountError::Mount)?;
        Ok(Self {
            io,
            clock,
            buf,
            geometry,
            fsinfo,
            open_files: [None; N],
        })
    }

    /// Number of free data clusters remaining.
    pub fn free_sectors(&self) -> u32 {
        self.fsinfo.free_sector_count
    }

    /// The authoritative size of an open file.
    pub fn file_size(&self, handle: FileHandle) -> Option<u32> {
        self.open_files[handle.0].map(|f| f.file_size)
    }

    fn slot_matches_name(open: &OpenFile, name: ShortName) -> bool {
        open.name == name
    }

    /// Opens `name` in `mode`, returning a handle on success.
    ///
    /// `mode` follows the classic C `fopen` single-character convention:
    /// `'r'`ead, `'w'`rite (create new), `'a'`ppend, `'m'`odify.
    pub fn open(&mut self, name: &str, mode: char) -> Result<FileHandle, OpenError> {
        let short_name = ShortName::format(name).map_err(|_| OpenError::InvalidName)?;

        if self
            .open_files
            .iter()
            .flatten()
            .any(|f| Self::slot_matches_name(f, short_name))
        {
            return Err(OpenError::AlreadyOpen);
        }

        let slot = self.open_files.iter().position(|f| f.is_none()).ok_or(OpenError::NoFreeSlot)?;

        let found = dir::find(&mut self.io, &mut self.buf, &self.geometry, self.geometry.root_cluster, short_name);

        let open_file = match mode {
            #[cfg(feature = "read")]
            'r' => {
                let entry = match found {
                    Ok(entry) => entry,
                    Err(_) => return Err(OpenError::NotFound),
                };
                OpenFile {
                    mode: FileMode::Reading,
                    name: short_name,
                    first_cluster: entry.first_cluster,
                    cluster: entry.first_cluster,
                    offset_in_cluster: 0,
                    offset_in_file: 0,
                    file_size: entry.file_size,
                    dir_location: entry.location,
                }
            }
            #[cfg(feature = "write")]
            'w' => {
                if found.is_ok() {
                    return Err(OpenError::AlreadyExists);
                }
                let cluster = fat::allocate(&mut self.io, &mut self.buf, &self.geometry, &mut self.fsinfo)
                    .map_err(|NoSpace| OpenError::NoSpace)?;
                fat::write_entry(&mut self.io, &mut self.buf, &self.geometry, cluster, self.geometry.end_of_chain_marker);
                trace!("open: created new chain head at cluster {cluster}");
                OpenFile {
                    mode: FileMode::CreatingNew,
                    name: short_name,
                    first_cluster: cluster,
                    cluster,
                    offset_in_cluster: 0,
                    offset_in_file: 0,
                    file_size: 0,
                    dir_location: DirEntryLocation { sector: 0, index: 0 },
                }
            }
            #[cfg(feature = "append")]
            'a' => {
                let entry = match found {
                    Ok(entry) => entry,
                    Err(_) => return Err(OpenError::NotFound),
                };
                let mut open_file = OpenFile {
                    mode: FileMode::Appending,
                    name: short_name,
                    first_cluster: entry.first_cluster,
                    cluster: entry.first_cluster,
                    offset_in_cluster: 0,
                    offset_in_file: 0,
                    file_size: entry.file_size,
                    dir_location: entry.location,
                };
                self.seek_to(&mut open_file, entry.file_size);
                open_file
            }
            #[cfg(feature = "modify")]
            'm' => {
                let entry = match found {
                    Ok(entry) => entry,
                    Err(_) => return Err(OpenError::NotFound),
                };
                OpenFile {
                    mode: FileMode::Modifying,
                    name: short_name,
                    first_cluster: entry.first_cluster,
                    cluster: entry.first_cluster,
                    offset_in_cluster: 0,
                    offset_in_file: 0,
                    file_size: entry.file_size,
                    dir_location: entry.location,
                }
            }
            _ => return Err(OpenError::InvalidMode),
        };

        self.open_files[slot] = Some(open_file);
        Ok(FileHandle(slot))
    }

    /// Walks `open.first_cluster` forward by `pos / 512` FAT links and sets
    /// `offset_in_cluster`/`offset_in_file` accordingly. Shared by append's
    /// open-time seek-to-tail and `seek` itself.
    fn seek_to(&mut self, open: &mut OpenFile, pos: u32) {
        open.offset_in_file = pos;
        open.offset_in_cluster = (pos % SECTOR_SIZE as u32) as u16;

        let mut cluster = open.first_cluster;
        let mut remaining = pos / SECTOR_SIZE as u32;
        while remaining > 0 {
            cluster = fat::chain_next(&mut self.io, &mut self.buf, &self.geometry, cluster);
            remaining -= 1;
        }
        open.cluster = cluster;
    }

    /// Reads up to `buf.len()` bytes, stopping early at end-of-file.
    /// Returns the number of bytes actually read; a short read due to an
    /// unexpected end-of-chain before `file_size` is reached is reported
    /// as [`ReadError::ReadFailed`] with the partial transfer retained.
    #[cfg(feature = "read")]
    pub fn read(&mut self, handle: FileHandle, out: &mut [u8]) -> Result<usize, ReadError> {
        let mut open = self.open_files[handle.0].expect("read on a closed handle");
        let mut written = 0usize;
        let mut remaining = out.len();
        let mut failed = false;

        while remaining > 0 && open.offset_in_file < open.file_size {
            let space_in_cluster = SECTOR_SIZE - open.offset_in_cluster as usize;
            let bytes_left_in_file = (open.file_size - open.offset_in_file) as usize;
            let chunk = remaining.min(space_in_cluster).min(bytes_left_in_file);

            let sector = block_device::cluster_to_sector(open.cluster, self.geometry.first_data_sector);
            self.io.read_sector(sector, &mut self.buf);
            let start = open.offset_in_cluster as usize;
            out[written..written + chunk].copy_from_slice(&self.buf[start..start + chunk]);

            written += chunk;
            open.offset_in_file += chunk as u32;
            open.offset_in_cluster += chunk as u16;
            remaining -= chunk;

            if open.offset_in_cluster as usize >= SECTOR_SIZE {
                open.offset_in_cluster -= SECTOR_SIZE as u16;
                let next = fat::chain_next(&mut self.io, &mut self.buf, &self.geometry, open.cluster);
                if fat::is_eoc(next) {
                    if remaining > 0 && open.offset_in_file < open.file_size {
                        failed = true;
                    }
                    self.open_files[handle.0] = Some(open);
                    if failed {
                        return Err(ReadError::ReadFailed);
                    }
                    return Ok(written);
                }
                open.cluster = next;
            }
        }

        // Running past end-of-file without hitting a bad EOC is not a
        // failure: the loop condition above just stops early.
        self.open_files[handle.0] = Some(open);
        Ok(written)
    }

    /// Writes `data`, extending the file's cluster chain as needed.
    /// Already-written bytes on a mid-write [`WriteError::NoSpace`] remain
    /// persisted.
    #[cfg(any(feature = "write", feature = "append", feature = "modify"))]
    pub fn write(&mut self, handle: FileHandle, data: &[u8]) -> Result<usize, WriteError> {
        let mut open = self.open_files[handle.0].ok_or(WriteError::NotOpen)?;
        if matches!(open.mode, FileMode::Reading) {
            return Err(WriteError::ReadOnly);
        }

        let mut offset = 0usize;
        let mut remaining = data.len();

        while remaining > 0 {
            let chunk = remaining.min(SECTOR_SIZE - open.offset_in_cluster as usize);

            self.buf.fill(0);
            if open.offset_in_cluster != 0 || matches!(open.mode, FileMode::Modifying) {
                let sector = block_device::cluster_to_sector(open.cluster, self.geometry.first_data_sector);
                self.io.read_sector(sector, &mut self.buf);
            }

            let start = open.offset_in_cluster as usize;
            self.buf[start..start + chunk].copy_from_slice(&data[offset..offset + chunk]);
            let sector = block_device::cluster_to_sector(open.cluster, self.geometry.first_data_sector);
            self.io.write_sector(sector, &self.buf);

            remaining -= chunk;
            offset += chunk;
            open.offset_in_file += chunk as u32;
            open.offset_in_cluster += chunk as u16;
            if open.offset_in_file > open.file_size {
                open.file_size = open.offset_in_file;
            }

            if remaining > 0 {
                let next = fat::chain_next(&mut self.io, &mut self.buf, &self.geometry, open.cluster);
                let needs_new_cluster = matches!(open.mode, FileMode::Appending | FileMode::CreatingNew)
                    || (matches!(open.mode, FileMode::Modifying) && fat::is_eoc(next));

                if needs_new_cluster {
                    match fat::allocate(&mut self.io, &mut self.buf, &self.geometry, &mut self.fsinfo) {
                        Ok(new_cluster) => {
                            fat::write_entry(&mut self.io, &mut self.buf, &self.geometry, open.cluster, new_cluster);
                            fat::write_entry(
                                &mut self.io,
                                &mut self.buf,
                                &self.geometry,
                                new_cluster,
                                self.geometry.end_of_chain_marker,
                            );
                            open.cluster = new_cluster;
                            open.offset_in_cluster = 0;
                        }
                        Err(NoSpace) => {
                            warn!("write: out of free clusters after {offset} bytes");
                            self.open_files[handle.0] = Some(open);
                            return Err(WriteError::NoSpace);
                        }
                    }
                } else {
                    open.cluster = next;
                    open.offset_in_cluster = 0;
                }
            }
        }

        self.open_files[handle.0] = Some(open);
        Ok(offset)
    }

    /// Seeks an open Reading or Modifying file. [`SEEK_END`] seeks to the
    /// current end of file; any other `pos` must be `< file_size`.
    #[cfg(feature = "seek-tell")]
    pub fn seek(&mut self, handle: FileHandle, pos: u32) -> Result<(), SeekError> {
        let mut open = self.open_files[handle.0].expect("seek on a closed handle");
        if !open.mode.is_seekable() {
            return Err(SeekError::NotSeekableInThisMode);
        }

        let target = if pos == SEEK_END {
            open.file_size
        } else {
            if pos >= open.file_size {
                return Err(SeekError::InvalidPosition);
            }
            pos
        };

        self.seek_to(&mut open, target);
        self.open_files[handle.0] = Some(open);
        Ok(())
    }

    /// Returns the current absolute byte offset within an open file.
    #[cfg(feature = "seek-tell")]
    pub fn tell(&self, handle: FileHandle) -> u32 {
        self.open_files[handle.0].expect("tell on a closed handle").offset_in_file
    }

    /// Closes a handle, flushing its directory entry as required by mode.
    pub fn close(&mut self, handle: FileHandle) -> Result<(), CloseError> {
        let open = match self.open_files[handle.0] {
            Some(open) => open,
            None => return Ok(()),
        };

        match open.mode {
            #[cfg(feature = "write")]
            FileMode::CreatingNew => {
                let location = dir::allocate_slot(
                    &mut self.io,
                    &mut self.buf,
                    &self.geometry,
                    &mut self.fsinfo,
                    self.geometry.root_cluster,
                )
                .map_err(|NoSpace| CloseError::CreateEntryFailed)?;
                dir::write_dir_entry(
                    &mut self.io,
                    &mut self.buf,
                    &self.geometry,
                    &self.clock,
                    location,
                    open.name,
                    open.first_cluster,
                    open.file_size,
                );
            }
            #[cfg(any(feature = "append", feature = "modify"))]
            FileMode::Appending | FileMode::Modifying => {
                dir::update_dir_entry(
                    &mut self.io,
                    &mut self.buf,
                    &self.geometry,
                    &self.clock,
                    open.dir_location,
                    open.file_size,
                );
            }
            _ => {}
        }

        debug!("closed handle {}", handle.0);
        self.open_files[handle.0] = None;
        Ok(())
    }

    /// Lists every short name in the root directory through `callback`.
    #[cfg(feature = "listing")]
    pub fn list(&mut self, callback: impl FnMut(ShortName)) -> Result<(), dir::ListError> {
        dir::list(&mut self.io, &mut self.buf, &self.geometry, self.geometry.root_cluster, callback)
    }
}

/// Combined error type for [`Fat32::set_partition`], which both selects a
/// partition and mounts the volume found there.
#[cfg(feature = "partition")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionOrMountError {
    Partition(mbr::PartitionError),
    Mount(MountError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::vec::Vec;

    struct MemoryDevice {
        sectors: Vec<[u8; SECTOR_SIZE]>,
    }

    impl BlockDevice for MemoryDevice {
        fn read_sector(&mut self, sector: u32, buf: &mut [u8; SECTOR_SIZE]) {
            buf.copy_from_slice(&self.sectors[sector as usize]);
        }
        fn write_sector(&mut self, sector: u32, buf: &[u8; SECTOR_SIZE]) {
            self.sectors[sector as usize].copy_from_slice(buf);
        }
    }

    /// A tiny, freshly formatted volume: 4 reserved sectors, a 1-sector
    /// FAT, root directory at cluster 2 occupying 1 sector, 30 data
    /// sectors total.
    fn formatted_image() -> MemoryDevice {
        let mut sectors = std::vec![[0u8; SECTOR_SIZE]; 40];

        let boot = &mut sectors[0];
        boot[0] = 0xEB;
        boot[11..13].copy_from_slice(&512u16.to_le_bytes());
        boot[13] = 1;
        boot[14..16].copy_from_slice(&4u16.to_le_bytes());
        boot[16] = 1;
        boot[36..40].copy_from_slice(&1u32.to_le_bytes());
        boot[44..48].copy_from_slice(&2u32.to_le_bytes());
        boot[32..36].copy_from_slice(&35u32.to_le_bytes());

        let fat = &mut sectors[4];
        fat[4..8].copy_from_slice(&0x0FFF_FFF8u32.to_le_bytes());
        fat[8..12].copy_from_slice(&0x0FFF_FFFFu32.to_le_bytes()); // root cluster 2 = EOC

        let fsinfo = &mut sectors[1];
        fsinfo[0..4].copy_from_slice(&0x4161_5252u32.to_le_bytes());
        fsinfo[488..492].copy_from_slice(&28u32.to_le_bytes());
        fsinfo[492..496].copy_from_slice(&2u32.to_le_bytes());

        MemoryDevice { sectors }
    }

    fn mounted() -> Fat32<MemoryDevice, FixedClock, 4> {
        Fat32::mount(formatted_image(), FixedClock { date: 0x4A21, time: 0x6000 }).unwrap()
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut fs = mounted();
        let handle = fs.open("HELLO.TXT", 'w').unwrap();
        fs.write(handle, b"hi").unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("HELLO.TXT", 'r').unwrap();
        let mut out = [0u8; 2];
        let n = fs.read(handle, &mut out).unwrap();
        fs.close(handle).unwrap();

        assert_eq!(n, 2);
        assert_eq!(&out, b"hi");
        assert_eq!(fs.file_size(handle), None);
    }

    #[test]
    fn reopen_reports_correct_size_and_listing() {
        let mut fs = mounted();
        let handle = fs.open("A.BIN", 'w').unwrap();
        fs.write(handle, &[0xAAu8; 513]).unwrap();
        fs.close(handle).unwrap();

        let mut names = std::vec::Vec::new();
        fs.list(|name| {
            let mut out = [0u8; 12];
            let len = name.display(&mut out);
            names.push(std::vec::Vec::from(&out[..len]));
        })
        .unwrap();
        assert_eq!(names, std::vec![b"A.BIN".to_vec()]);

        let handle = fs.open("A.BIN", 'r').unwrap();
        let mut out = [0u8; 513];
        let n = fs.read(handle, &mut out).unwrap();
        assert_eq!(n, 513);
        assert!(out.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn no_free_slot_when_table_is_full() {
        let mut fs: Fat32<MemoryDevice, FixedClock, 1> =
            Fat32::mount(formatted_image(), FixedClock { date: 0, time: 0 }).unwrap();
        let _h1 = fs.open("A.TXT", 'w').unwrap();
        assert_eq!(fs.open("B.TXT", 'w'), Err(OpenError::NoFreeSlot));
    }

    #[test]
    fn cannot_open_same_name_twice() {
        let mut fs = mounted();
        let _h1 = fs.open("A.TXT", 'w').unwrap();
        assert_eq!(fs.open("A.TXT", 'w'), Err(OpenError::AlreadyOpen));
    }

    #[test]
    fn append_preserves_prefix_and_extends_size() {
        let mut fs = mounted();
        let handle = fs.open("LOG.TXT", 'w').unwrap();
        fs.write(handle, &[1u8; 5]).unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("LOG.TXT", 'a').unwrap();
        fs.write(handle, &[2u8; 5]).unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("LOG.TXT", 'r').unwrap();
        let mut out = [0u8; 10];
        fs.read(handle, &mut out).unwrap();
        assert_eq!(&out[..5], &[1u8; 5]);
        assert_eq!(&out[5..], &[2u8; 5]);
    }

    #[test]
    fn modify_overwrites_in_place_without_changing_size() {
        let mut fs = mounted();
        let handle = fs.open("M.BIN", 'w').unwrap();
        fs.write(handle, &[0u8; 20]).unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("M.BIN", 'm').unwrap();
        fs.seek(handle, 5).unwrap();
        fs.write(handle, &[0x55u8; 3]).unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("M.BIN", 'r').unwrap();
        let mut out = [0u8; 20];
        fs.read(handle, &mut out).unwrap();
        assert_eq!(out[5..8], [0x55, 0x55, 0x55]);
        assert_eq!(out[0..5], [0, 0, 0, 0, 0]);
        assert_eq!(fs.file_size(handle), Some(20));
    }

    #[test]
    fn modify_at_cluster_boundary_preserves_trailing_bytes() {
        let mut fs = mounted();
        let handle = fs.open("B.BIN", 'w').unwrap();
        fs.write(handle, &[0x11u8; 20]).unwrap();
        fs.close(handle).unwrap();

        // Seek back to offset 0 — a cluster boundary — and overwrite only
        // the first 3 bytes. The other 17 must survive untouched.
        let handle = fs.open("B.BIN", 'm').unwrap();
        fs.seek(handle, 0).unwrap();
        fs.write(handle, &[0xFFu8; 3]).unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("B.BIN", 'r').unwrap();
        let mut out = [0u8; 20];
        fs.read(handle, &mut out).unwrap();
        assert_eq!(out[0..3], [0xFF, 0xFF, 0xFF]);
        assert_eq!(out[3..20], [0x11u8; 17]);
    }

    #[test]
    fn seek_end_then_tell() {
        let mut fs = mounted();
        let handle = fs.open("S.BIN", 'w').unwrap();
        fs.write(handle, &[7u8; 9]).unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("S.BIN", 'm').unwrap();
        fs.seek(handle, SEEK_END).unwrap();
        assert_eq!(fs.tell(handle), 9);
    }

    #[test]
    fn reading_exactly_to_eof_then_past_it_yields_zero_not_an_error() {
        let mut fs = mounted();
        let handle = fs.open("E.BIN", 'w').unwrap();
        fs.write(handle, &[9u8; 4]).unwrap();
        fs.close(handle).unwrap();

        let handle = fs.open("E.BIN", 'r').unwrap();
        let mut out = [0u8; 4];
        assert_eq!(fs.read(handle, &mut out), Ok(4));
        // Past end of file: not a ReadError, just zero further bytes.
        let mut tail = [0u8; 4];
        assert_eq!(fs.read(handle, &mut tail), Ok(0));
    }

    #[test]
    fn running_out_of_clusters_eventually_reports_no_space() {
        // Each `'w'` open allocates its file's first cluster up front, so
        // draining free space to zero means repeatedly opening-and-closing
        // distinct names through a single-slot table.
        let mut fs: Fat32<MemoryDevice, FixedClock, 1> =
            Fat32::mount(formatted_image(), FixedClock { date: 0, time: 0 }).unwrap();

        let mut created = 0u32;
        loop {
            let name = std::format!("F{created}.BIN");
            match fs.open(&name, 'w') {
                Ok(handle) => {
                    fs.close(handle).unwrap();
                    created += 1;
                }
                Err(OpenError::NoSpace) => break,
                Err(e) => panic!("unexpected open error: {e:?}"),
            }
        }

        assert_eq!(fs.free_sectors(), 0);
        assert!(created > 0);
    }
}
