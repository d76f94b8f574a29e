use regex::Regex;

use crate::error::Result;

// commons-lang3-3.4.jar -> /usr/lib/jvm/java-8-openjdk-amd64/jre/lib/rt.jar
const JAR_TO_JAR: &str = r"^(.+?\.jar)\s+->\s+(.+?\.jar)\s*$";

//    org.apache.commons.lang3.AnnotationUtils -> java.lang.Boolean
//    org.apache.commons.lang3.AnnotationUtils -> org.apache.commons.lang3.AnnotationUtils$1 commons-lang3-3.4.jar
const CLASS_TO_CLASS: &str = r"^\s+(\S+)\s+->\s+(\S+)\s*.*$";

//    org.apache.commons.lang3 (commons-lang3-3.4.jar)
const PACKAGE_SOURCE: &str = r"^\s+(\S+)\s+\(.+?\.jar\)\s*$";

//       -> java.io
//       -> com.sun.tools.javadoc.Main       JDK internal API (tools.jar)
const PACKAGE_DESTINATION: &str = r"^\s+->\s+(\S+)\s*.*$";

/// Line recognizers for the three jdeps report dialects.
///
/// Every rule is anchored at both ends of the line, so an arrow embedded in
/// unrelated text never yields a partial match.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    jar: Regex,
    class: Regex,
    package_source: Regex,
    package_destination: Regex,
}

impl PatternRegistry {
    pub fn new() -> Result<Self> {
        Ok(Self {
            jar: Regex::new(JAR_TO_JAR)?,
            class: Regex::new(CLASS_TO_CLASS)?,
            package_source: Regex::new(PACKAGE_SOURCE)?,
            package_destination: Regex::new(PACKAGE_DESTINATION)?,
        })
    }

    /// `a.jar -> b.jar`
    pub fn match_jar<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        Self::pair(&self.jar, line)
    }

    /// `  a.B -> c.D [trailing]`; the trailing annotation is dropped.
    pub fn match_class<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        Self::pair(&self.class, line)
    }

    /// `  pkg.name (archive.jar)`, yielding the package name.
    pub fn match_package_source<'a>(&self, line: &'a str) -> Option<&'a str> {
        Self::single(&self.package_source, line)
    }

    /// `  -> pkg.name [trailing]`, yielding the destination package.
    pub fn match_package_destination<'a>(&self, line: &'a str) -> Option<&'a str> {
        Self::single(&self.package_destination, line)
    }

    fn pair<'a>(re: &Regex, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = re.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    fn single<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
        Some(re.captures(line)?.get(1)?.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PatternRegistry {
        PatternRegistry::new().unwrap()
    }

    #[test]
    fn jar_rule_captures_both_archives() {
        let r = registry();
        assert_eq!(
            r.match_jar("commons-lang3-3.4.jar -> /usr/lib/jvm/java-8-openjdk-amd64/jre/lib/rt.jar"),
            Some((
                "commons-lang3-3.4.jar",
                "/usr/lib/jvm/java-8-openjdk-amd64/jre/lib/rt.jar"
            ))
        );
    }

    #[test]
    fn jar_rule_requires_archive_suffix() {
        let r = registry();
        assert_eq!(r.match_jar("foo.jar -> not found"), None);
        assert_eq!(r.match_jar("foo.jar -> bar.jar extra"), None);
    }

    #[test]
    fn class_rule_discards_trailing_text() {
        let r = registry();
        assert_eq!(
            r.match_class(
                "   org.apache.commons.lang3.AnnotationUtils -> org.apache.commons.lang3.AnnotationUtils$1 commons-lang3-3.4.jar"
            ),
            Some((
                "org.apache.commons.lang3.AnnotationUtils",
                "org.apache.commons.lang3.AnnotationUtils$1"
            ))
        );
    }

    #[test]
    fn class_rule_needs_leading_whitespace() {
        assert_eq!(registry().match_class("A -> B"), None);
    }

    #[test]
    fn package_source_captures_name_only() {
        let r = registry();
        assert_eq!(
            r.match_package_source("   org.apache.commons.lang3 (commons-lang3-3.4.jar)"),
            Some("org.apache.commons.lang3")
        );
        assert_eq!(r.match_package_source("   org.apache.commons.lang3"), None);
    }

    #[test]
    fn package_destination_handles_annotations() {
        let r = registry();
        assert_eq!(r.match_package_destination("      -> java.io"), Some("java.io"));
        assert_eq!(
            r.match_package_destination(
                "      -> com.sun.tools.javadoc.Main       JDK internal API (tools.jar)"
            ),
            Some("com.sun.tools.javadoc.Main")
        );
        assert_eq!(r.match_package_destination("-> java.io"), None);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let r = registry();
        assert_eq!(r.match_jar("a.jar -> b.jar\r"), Some(("a.jar", "b.jar")));
        assert_eq!(r.match_package_source("  org.a (x.jar)\r"), Some("org.a"));
    }
}
