//! Best-effort project ecosystem detection for prompt enrichment.

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

/// Ordered marker-file → ecosystem-label mapping. Detected labels are
/// rendered in this order regardless of directory iteration order.
const MARKERS: &[(&str, &str)] = &[
    ("go.mod", "Go project"),
    ("package.json", "JavaScript/Node.js project"),
    ("pom.xml", "Java/Maven project"),
    ("CMakeLists.txt", "C/C++ project with CMake"),
    ("pyproject.toml", "Python project"),
    ("Cargo.toml", "Rust project"),
];

/// Detected ecosystem labels. May be empty; never an error.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    labels: Vec<&'static str>,
}

impl ProjectContext {
    /// One descriptive sentence fragment, empty when nothing matched.
    pub fn describe(&self) -> String {
        if self.labels.is_empty() {
            return String::new();
        }
        let mut out = String::from("Project files include: ");
        for label in &self.labels {
            out.push_str(label);
            out.push_str(". ");
        }
        out.trim_end().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Scan the top-level entries of `dir` for ecosystem markers.
///
/// Enrichment only: any I/O failure degrades to an empty context so message
/// generation is never blocked.
pub fn probe(dir: &Path) -> ProjectContext {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("couldn't scan project directory: {e}");
            return ProjectContext::default();
        }
    };

    let names: HashSet<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    let labels = MARKERS
        .iter()
        .filter(|(marker, _)| names.contains(*marker))
        .map(|(_, label)| *label)
        .collect();

    ProjectContext { labels }
}
