//! List supported targets.

use webcc_adapters::EmitterRegistry;

/// Run the targets command.
pub fn run() {
    for line in target_lines(&EmitterRegistry::default()) {
        println!("{}", line);
    }
}

/// One line per registered target: name, framework, component file.
pub fn target_lines(registry: &EmitterRegistry) -> Vec<String> {
    registry
        .emitters()
        .map(|e| format!("{:<8} {} ({})", e.name(), e.display_name(), e.files().component))
        .collect()
}
