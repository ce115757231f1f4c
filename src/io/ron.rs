//! RON I/O for grid configurations
use crate::{config::GridConfig, types::RealScalar};
use std::path::Path;

impl<T: RealScalar + serde::Serialize> GridConfig<T> {
    /// Serialise the configuration to a RON string
    pub fn to_ron_string(&self) -> String {
        ron::to_string(self).unwrap()
    }

    /// Write the configuration to a RON file
    pub fn export_as_ron(&self, path: impl AsRef<Path>) {
        std::fs::write(path, self.to_ron_string()).unwrap();
    }
}

impl<T: RealScalar + serde::de::DeserializeOwned> GridConfig<T> {
    /// Read a configuration from a RON string
    pub fn from_ron_string(s: &str) -> Self {
        ron::from_str(s).unwrap()
    }

    /// Read a configuration from a RON file
    pub fn import_from_ron(path: impl AsRef<Path>) -> Self {
        Self::from_ron_string(&std::fs::read_to_string(path).unwrap())
    }
}
