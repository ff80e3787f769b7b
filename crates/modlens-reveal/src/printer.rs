//! The replacement consistency report.
//!
//! ```text
//! 'originalA' is replaced:
//!  ✓ offender     -> overrideA     @ v1.0.0
//!    offender-bis -> overrideA-bis @ v2.0.0
//!
//! [✓] Match with a top-level replace in 'test-module'
//! ```
//!
//! A check mark flags the rows whose target is the one the main module
//! itself chose. Offender and target columns are padded per group, rows
//! without a version included.

use std::fmt;
use std::io::{self, Write};

use crate::replacements::{Replacement, Replacements};

const MATCH_MARKER: char = '✓';

impl Replacements {
    /// Write the report to `writer`. Nothing is written when no module is replaced.
    pub fn print<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Narrow the report to `offenders` and `replaced` modules, then print it.
    /// Empty lists do not filter.
    pub fn print_filtered<W, S>(
        &self,
        writer: &mut W,
        offenders: &[S],
        replaced: &[S],
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        self.filter_on_offending_module(offenders)
            .filter_on_replaced_module(replaced)
            .print(writer)
    }

    fn fmt_group(&self, f: &mut fmt::Formatter<'_>, original: &str) -> fmt::Result {
        let group = self.replacements_of(original);
        let offender_width = column_width(group, |r| &r.offender.path);
        let target_width = column_width(group, |r| &r.target);

        writeln!(f, "'{original}' is replaced:")?;
        for r in group {
            let marker = if self.is_top_level(original, &r.target) {
                MATCH_MARKER
            } else {
                ' '
            };
            write!(
                f,
                " {marker} {:<offender_width$} -> {:<target_width$}",
                r.offender.path, r.target
            )?;
            if !r.version.is_empty() {
                write!(f, " @ {}", r.version)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Replacements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for original in self.originals() {
            self.fmt_group(f, original)?;
        }
        writeln!(
            f,
            "[{MATCH_MARKER}] Match with a top-level replace in '{}'",
            self.main()
        )
    }
}

fn column_width(group: &[Replacement], field: impl Fn(&Replacement) -> &String) -> usize {
    group
        .iter()
        .map(|r| field(r).chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replacements::tests::sample;
    use modlens_core::module::Module;
    use std::sync::Arc;

    const EXPECTED: &str = "\
'originalA' is replaced:
 ✓ offender     -> overrideA     @ v1.0.0
   offender-bis -> overrideA-bis @ v2.0.0

'originalB' is replaced:
   moduleA         -> overrideB     @ v1.0.0
 ✓ offender-tertio -> overrideB-bis @ v2.0.0

'originalC' is replaced:
   moduleA -> ./overrideC

[✓] Match with a top-level replace in 'test-module'
";

    fn render(r: &Replacements) -> String {
        let mut out = Vec::new();
        r.print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_report() {
        assert_eq!(render(&sample()), EXPECTED);
    }

    #[test]
    fn display_matches_print() {
        let r = sample();
        assert_eq!(r.to_string(), render(&r));
    }

    #[test]
    fn empty_aggregate_prints_nothing() {
        let mut r = Replacements::new("main");
        r.insert_top_level("a", "b");
        assert_eq!(render(&r), "");
    }

    #[test]
    fn filtered_print() {
        let r = sample();
        let mut out = Vec::new();
        r.print_filtered(&mut out, &["moduleA"], &["originalC"]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "'originalC' is replaced:\n   moduleA -> ./overrideC\n\n\
             [✓] Match with a top-level replace in 'test-module'\n"
        );
    }

    #[test]
    fn filtered_print_without_filters_is_full_report() {
        let r = sample();
        let mut out = Vec::new();
        let none: &[&str] = &[];
        r.print_filtered(&mut out, none, none).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn only_matching_row_is_marked() {
        let x = Arc::new(Module::new("X", "v1.0.0"));
        let y = Arc::new(Module::new("Y", "v1.0.0"));
        let mut r = Replacements::new("M");
        r.insert_top_level("originalA", "overrideA");
        for (offender, target) in [(&x, "overrideA"), (&y, "overrideB")] {
            r.push(Replacement {
                offender: Arc::clone(offender),
                original: "originalA".into(),
                target: target.into(),
                version: "v1.0.0".into(),
            });
        }
        assert_eq!(
            render(&r),
            "'originalA' is replaced:\n \
             ✓ X -> overrideA @ v1.0.0\n   \
             Y -> overrideB @ v1.0.0\n\n\
             [✓] Match with a top-level replace in 'M'\n"
        );
    }

    #[test]
    fn mixed_versions_align_version_suffix() {
        let long = Arc::new(Module::new("a-long-offender", ""));
        let short = Arc::new(Module::new("b", ""));
        let mut r = Replacements::new("main");
        r.push(Replacement {
            offender: Arc::clone(&long),
            original: "x".into(),
            target: "../local".into(),
            version: String::new(),
        });
        r.push(Replacement {
            offender: Arc::clone(&short),
            original: "x".into(),
            target: "x-fork".into(),
            version: "v1.0.0".into(),
        });
        let out = render(&r);
        assert!(out.contains("   a-long-offender -> ../local\n"), "{out}");
        assert!(out.contains("   b               -> x-fork   @ v1.0.0\n"), "{out}");
    }

    #[test]
    fn path_rows_are_padded_to_widest_target() {
        let a = Arc::new(Module::new("a", ""));
        let b = Arc::new(Module::new("b", ""));
        let mut r = Replacements::new("main");
        r.push(Replacement {
            offender: Arc::clone(&a),
            original: "c".into(),
            target: "./c".into(),
            version: String::new(),
        });
        r.push(Replacement {
            offender: Arc::clone(&b),
            original: "c".into(),
            target: "example.com/c-fork".into(),
            version: "v1.0.0".into(),
        });
        assert_eq!(
            render(&r),
            "'c' is replaced:\n\
             \x20  a -> ./c               \n\
             \x20  b -> example.com/c-fork @ v1.0.0\n\n\
             [✓] Match with a top-level replace in 'main'\n"
        );
    }
}
