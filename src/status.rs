//! The fixer's progress is shown as one line that gets erased and reprinted.

/// Clears the current terminal line and returns the cursor to column 0.
pub const ERASE_LINE: &str = "\x1b[2K\r";

/// No trailing newline: the line is overwritten once the fixer returns.
pub fn fixing(command: &str) -> String {
    format!("\x1b[90m> {}\x1b[m  🛠️  fixing...", command)
}

/// Replaces the fixing line when the fixer exits non-zero.
pub fn failed(command: &str) -> String {
    format!("\x1b[31m> {}\x1b[m  ❌ fix failed", command)
}

/// Replaces the fixing line once the generated script succeeded.
pub fn applied(command: &str) -> String {
    format!("\x1b[32m> {}\x1b[m  ✅ fix applied", command)
}
