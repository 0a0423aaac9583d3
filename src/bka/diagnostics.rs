/// Error-reporting channel that failed account operations are announced on before the error
/// is handed back to the caller.
pub trait Diagnostics {
    fn report(&self, message: &str);
}

/// Sends diagnostics to the `log` facade at error level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, message: &str) {
        log::error!("{message}");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, message: &str) {
        (**self).report(message);
    }
}
