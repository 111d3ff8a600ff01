use crate::pass::charset::SPECIAL;
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_banner() {
    box_top("Passmith");
    box_line_center("Password generator with keyword embedding");
    box_line("");
    box_line("Answer the prompts to configure a password.");
    box_line("Esc/Ctrl+Q cancels, Ctrl+C quits.");
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Passmith");
    box_line_center("Password generator with keyword embedding");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments, answer the prompts.");
    box_line("  2) Flags: pass options directly (e.g. -l 16 -n 3).");
    box_line("");
    box_line("USAGE:");
    box_line("  passmith [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12)");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("  -k, --keyword <WORD>", "Embed WORD at a random position");
    box_opt("  -x, --exclude <CHARS>", "Never draw these characters");
    box_opt("      --no-lower", "Drop the lowercase class");
    box_opt("      --no-upper", "Drop the uppercase class");
    box_opt("      --no-digits", "Drop the digit class");
    box_opt("      --no-special", &format!("Drop the special class ({SPECIAL})"));
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passmith                 Interactive session");
    box_line("  passmith -l 16           One password, 16 characters");
    box_line("  passmith -l 20 -n 3      Three 20-character passwords");
    box_line("  passmith -l 24 -k Cat    24 characters with \"Cat\" embedded");
    box_bottom();
    println!();
}
