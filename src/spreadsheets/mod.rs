pub mod export_xlsx;

pub use export_xlsx::export_estates_xlsx;
