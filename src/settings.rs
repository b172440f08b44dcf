use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub bank_path: PathBuf,
    pub ledger_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bank_path: PathBuf::from("questions.csv"),
            ledger_path: PathBuf::from("output.csv"),
        }
    }
}
