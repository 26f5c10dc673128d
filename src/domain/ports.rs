use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Fallback percentages applied when a caller leaves a field out.
pub trait ConfigProvider {
    fn labor_burden_percent(&self) -> f64;
    fn overhead_percent(&self) -> f64;
    fn profit_percent(&self) -> f64;
    fn currency_symbol(&self) -> &str;
}
