pub mod scan_source;
