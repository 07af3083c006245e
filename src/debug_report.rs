use tourparse::RunResult;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, run: &RunResult, color: bool) {
    let palette = ansi::Palette::new(color);
    let metrics = &run.metrics;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Converting: \"{}\"", input), ansi::CYAN)));
    println!("  {} {}", palette.dim("cleaned:"), palette.paint(&metrics.cleaned, ansi::BLUE));

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    println!(
        "  {} {}  {} {}  {} {}",
        palette.dim("tried:"),
        palette.paint(metrics.rules_considered.to_string(), ansi::YELLOW),
        palette.dim("skipped:"),
        palette.paint(metrics.rules_skipped.len().to_string(), ansi::YELLOW),
        palette.dim("errors:"),
        palette.paint(metrics.rule_errors.len().to_string(), ansi::YELLOW),
    );
    for (rule, err) in &metrics.rule_errors {
        println!("    {} {}", palette.paint(*rule, ansi::BLUE), palette.dim(err.to_string()));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match (&run.range, metrics.matched_rule) {
        (Some(range), Some(rule)) => {
            println!("  {}", palette.bold(palette.paint(range.to_string(), ansi::GREEN)));
            println!("      {} {}", palette.dim("rule:"), palette.paint(rule, ansi::CYAN));
            if let Some(raw) = &metrics.raw {
                println!("      {} {}", palette.dim("before postprocessing:"), palette.dim(raw.to_string()));
            }
        }
        (None, Some(rule)) => {
            println!("{}", palette.paint("  Claimed without a range", ansi::YELLOW));
            println!("      {} {}", palette.dim("rule:"), palette.paint(rule, ansi::CYAN));
        }
        _ => {
            println!("{}", palette.dim("  No rule matched"));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • Rules were skipped (missing digits or month name)");
            println!("  • Patterns didn't match");
            println!("  • A rule errored on a malformed clock time or date");
            println!("\n{}", palette.dim("  Tip: Set RUST_LOG=tourparse=trace to see every rule attempt"));
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", metrics.total), ansi::GREEN));
    println!();
}
