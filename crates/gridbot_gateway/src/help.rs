//! Command reference for interactive users.

/// Lines of the help screen, one command per line.
pub const HELP_LINES: &[&str] = &[
    "Available Commands:",
    "  forward (f)          - Move forward one step",
    "  backward (b)         - Move backward one step",
    "  left (l)             - Turn left",
    "  right (r)            - Turn right",
    "  diagonal <dir>       - Move diagonally (ne/se/sw/nw)",
    "  face <dir>           - Turn to face north/east/south/west",
    "  recharge             - Recharge battery to 100%",
    "  report               - Show robot status",
    "  status               - Show robot status as JSON",
    "  grid                 - Display current grid",
    "  obstacle <x> <y>     - Add or remove an obstacle",
    "  obstacles clear      - Remove all obstacles",
    "  obstacles reset      - Restore the default obstacles",
    "  reset                - Reset the robot to its initial state",
    "  help                 - Show this help",
    "  quit                 - Exit simulator",
];

/// The full help screen.
#[must_use]
pub fn help_text() -> String {
    HELP_LINES.join("\n")
}
