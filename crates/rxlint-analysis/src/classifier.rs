//! Subject classifier.
//!
//! Best-effort: identification is by case-sensitive substring search for
//! known constructor names, not by symbol resolution. An unrelated
//! identifier that contains `Subject` (or a shadowed import) is classified
//! as restricted. Exact identity is only used when a host supplies a
//! resolved type name.

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::declaration::{Initializer, PropertyDeclaration};

/// Constructor names treated as restricted, in priority order.
pub const RESTRICTED_TYPES: [&str; 6] = [
    "AsyncSubject",
    "BehaviorSubject",
    "ReplaySubject",
    "Subject",
    "SubjectSubscriber",
    "AnonymousSubject",
];

/// Keyword marking the start of a construction in declaration text.
const CONSTRUCTION_KEYWORD: &str = "new ";

static MATCHER: OnceLock<AhoCorasick> = OnceLock::new();

fn matcher() -> &'static AhoCorasick {
    MATCHER.get_or_init(|| {
        AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(RESTRICTED_TYPES)
            .expect("restricted type names are valid patterns")
    })
}

/// First restricted name found in `text`, preferring the longest name at
/// the leftmost match position.
pub fn matching_type(text: &str) -> Option<&'static str> {
    matcher()
        .find(text)
        .map(|m| RESTRICTED_TYPES[m.pattern().as_usize()])
}

/// Whether `text` contains any restricted constructor name.
pub fn is_restricted_type(text: &str) -> bool {
    matching_type(text).is_some()
}

/// The construction part of a declaration's text: everything from the last
/// `new ` onward. `None` when the text constructs nothing.
pub fn construction_fragment(text: &str) -> Option<&str> {
    text.rfind(CONSTRUCTION_KEYWORD).map(|at| &text[at..])
}

/// Exact identity check of a resolved type name such as
/// `rxjs.BehaviorSubject<number>`.
fn resolved_type_match(resolved: &str) -> Option<&'static str> {
    let without_generics = resolved.split('<').next().unwrap_or(resolved);
    let base = without_generics
        .rsplit('.')
        .next()
        .unwrap_or(without_generics)
        .trim();
    RESTRICTED_TYPES.iter().copied().find(|name| *name == base)
}

/// A declaration paired with its classification, computed once.
#[derive(Debug, Clone, Copy)]
pub struct Classified<'a> {
    declaration: &'a PropertyDeclaration,
    restricted_type: Option<&'static str>,
}

impl<'a> Classified<'a> {
    pub fn declaration(&self) -> &'a PropertyDeclaration {
        self.declaration
    }

    /// The restricted name that matched, if any.
    pub fn restricted_type(&self) -> Option<&'static str> {
        self.restricted_type
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted_type.is_some()
    }
}

/// Classify a declaration.
///
/// A resolved type from the host wins. Otherwise a parsed `new` expression
/// is matched on its callee. Any other parsed initializer is scanned from
/// its last `new `, and without structure the declaration text is scanned
/// the same way. Text with no `new `, or no initializer, is not restricted.
pub fn classify(declaration: &PropertyDeclaration) -> Classified<'_> {
    let restricted_type = match (&declaration.resolved_type, &declaration.initializer) {
        (Some(resolved), _) => resolved_type_match(resolved),
        (None, Initializer::Construct { callee, .. }) => matching_type(callee),
        (None, Initializer::Expression { text }) => {
            construction_fragment(text).and_then(matching_type)
        }
        (None, Initializer::Absent) => None,
        (None, Initializer::Unknown) => {
            construction_fragment(&declaration.text).and_then(matching_type)
        }
    };

    tracing::trace!(
        name = declaration.name.as_deref().unwrap_or("<unnamed>"),
        restricted = ?restricted_type,
        "classified property declaration"
    );

    Classified {
        declaration,
        restricted_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_restricted_name_matches() {
        for name in RESTRICTED_TYPES {
            assert!(is_restricted_type(&format!("new {name}<number>()")), "{name}");
        }
    }

    #[test]
    fn longest_name_is_reported() {
        assert_eq!(matching_type("new BehaviorSubject(0)"), Some("BehaviorSubject"));
        assert_eq!(matching_type("new SubjectSubscriber()"), Some("SubjectSubscriber"));
        assert_eq!(matching_type("new Subject()"), Some("Subject"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!is_restricted_type("new subject()"));
        assert!(!is_restricted_type("new SUBJECT()"));
    }

    #[test]
    fn substring_matches_are_accepted_false_positives() {
        assert!(is_restricted_type("new MySubjectFactory()"));
        assert!(is_restricted_type("new Foo('Subject')"));
    }

    #[test]
    fn fragment_starts_at_last_new() {
        let text = "private a = make(new Map(), new Subject<number>());";
        assert_eq!(construction_fragment(text), Some("new Subject<number>());"));
        assert_eq!(construction_fragment("private total = 5;"), None);
    }

    #[test]
    fn text_without_new_is_not_restricted() {
        let decl = PropertyDeclaration::new("private s$: Subject<number>;");
        assert!(!classify(&decl).is_restricted());
    }

    #[test]
    fn text_fallback_scans_the_construction_only() {
        let decl = PropertyDeclaration::new("private SubjectCount = new Map<string, number>();");
        assert!(!classify(&decl).is_restricted());

        let decl = PropertyDeclaration::new("counter$ = new AsyncSubject<number>();");
        assert_eq!(classify(&decl).restricted_type(), Some("AsyncSubject"));
    }

    #[test]
    fn parsed_construction_uses_callee() {
        let decl = PropertyDeclaration::new("x = new Rx.ReplaySubject(1);").with_initializer(
            Initializer::Construct {
                callee: "Rx.ReplaySubject".into(),
                text: "new Rx.ReplaySubject(1)".into(),
            },
        );
        assert_eq!(classify(&decl).restricted_type(), Some("ReplaySubject"));

        let decl = PropertyDeclaration::new("x = new Map<string, Subject<number>>();").with_initializer(
            Initializer::Construct {
                callee: "Map".into(),
                text: "new Map<string, Subject<number>>()".into(),
            },
        );
        assert!(!classify(&decl).is_restricted());
    }

    #[test]
    fn parsed_expression_uses_its_construction_fragment() {
        let decl = PropertyDeclaration::new("x = flag ? new Subject() : new ReplaySubject(1);")
            .with_initializer(Initializer::Expression {
                text: "flag ? new Subject() : new ReplaySubject(1)".into(),
            });
        assert_eq!(classify(&decl).restricted_type(), Some("ReplaySubject"));

        let decl = PropertyDeclaration::new("x = make(Subject);").with_initializer(
            Initializer::Expression {
                text: "make(Subject)".into(),
            },
        );
        assert!(!classify(&decl).is_restricted());
    }

    #[test]
    fn absent_initializer_is_not_restricted() {
        let decl = PropertyDeclaration::new("x: Subject<number>;").with_initializer(Initializer::Absent);
        assert!(!classify(&decl).is_restricted());
    }

    #[test]
    fn resolved_type_is_compared_exactly() {
        let decl = PropertyDeclaration::new("x = factory();")
            .with_initializer(Initializer::Expression { text: "factory()".into() })
            .with_resolved_type("rxjs.BehaviorSubject<number>");
        assert_eq!(classify(&decl).restricted_type(), Some("BehaviorSubject"));

        let decl = PropertyDeclaration::new("x = new MySubjectFactory();")
            .with_resolved_type("MySubjectFactory");
        assert!(!classify(&decl).is_restricted());
    }
}
