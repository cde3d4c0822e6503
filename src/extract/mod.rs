//! Label CSV parsing and ffmpeg still extraction

pub mod labels;
pub mod stills;

pub use labels::{read_label_csv, LabelRow};
pub use stills::{slugify_label, StillExtractor};
