mod fs_exporter;

pub use fs_exporter::FsExporter;
