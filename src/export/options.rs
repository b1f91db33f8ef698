#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
}
impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub csv: CsvOptions,
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: u64,
}
