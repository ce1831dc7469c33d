//! Test utilities shared across the tagloc workspace.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `relative` under `root`, creating parent directories.
pub fn write_fixture(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Catalog fixtures in the formats understood by `tagloc-i18n`.
pub mod catalog_fixtures {
    /// A French JSON catalog with a reordering and a placeholder-free message.
    pub fn french_json() -> &'static str {
        r#"{
  "locale": "fr",
  "translations": {
    "greeting": "Bonjour {$name} !",
    "pair": "{$1} et {$0}",
    "plain": "Au revoir"
  }
}"#
    }

    /// A German XLIFF 1.2 catalog with the same ids as [`french_json`].
    pub fn german_xliff() -> &'static str {
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
            "<xliff version=\"1.2\" xmlns=\"urn:oasis:names:tc:xliff:document:1.2\">\n",
            "  <file source-language=\"en\" target-language=\"de\" datatype=\"plaintext\" original=\"ng2.template\">\n",
            "    <body>\n",
            "      <trans-unit id=\"greeting\" datatype=\"html\">\n",
            "        <source>Hello <x id=\"name\"/>!</source>\n",
            "        <target>Hallo <x id=\"name\"/>!</target>\n",
            "      </trans-unit>\n",
            "      <trans-unit id=\"pair\" datatype=\"html\">\n",
            "        <source><x id=\"0\"/> and <x id=\"1\"/></source>\n",
            "        <target><x id=\"1\"/> und <x id=\"0\"/></target>\n",
            "      </trans-unit>\n",
            "      <trans-unit id=\"plain\" datatype=\"html\">\n",
            "        <source>Goodbye</source>\n",
            "        <target>Auf Wiedersehen</target>\n",
            "      </trans-unit>\n",
            "    </body>\n",
            "  </file>\n",
            "</xliff>\n"
        )
    }
}
