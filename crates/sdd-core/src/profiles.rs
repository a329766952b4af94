//! Technology stack profiles whose rules are appended to the global rules.

use crate::error::{Result, SddError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackProfile {
    pub key: &'static str,
    pub label: &'static str,
    pub rules: &'static [&'static str],
}

pub const STACK_PROFILES: &[StackProfile] = &[
    StackProfile {
        key: "generic",
        label: "Generic / none",
        rules: &[],
    },
    StackProfile {
        key: "frontend-react",
        label: "Frontend: React + Tailwind",
        rules: &[
            "Prefer Functional Components with Hooks.",
            "Use Tailwind CSS for styling. Avoid inline styles.",
            "Ensure accessibility (a11y) standards are met.",
            "Use strict type checking if TypeScript is enabled.",
            "Prefer React Query or SWR for data fetching.",
        ],
    },
    StackProfile {
        key: "frontend-next",
        label: "Frontend: Next.js (App Router)",
        rules: &[
            "Use App Router directory structure.",
            "Prefer Server Components by default; use 'use client' only when necessary.",
            "Optimize images using next/image.",
            "Use Server Actions for mutations.",
        ],
    },
    StackProfile {
        key: "frontend-vue",
        label: "Frontend: Vue.js 3 + Pinia",
        rules: &[
            "Use Composition API with <script setup>.",
            "Use Pinia for state management.",
            "Prefer Tailwind CSS or Scoped CSS.",
            "Follow the Vue Style Guide Priority A rules.",
        ],
    },
    StackProfile {
        key: "frontend-angular",
        label: "Frontend: Angular",
        rules: &[
            "Use Standalone Components.",
            "Prefer Signals over RxJS for synchronous state.",
            "Strictly follow the Angular Style Guide.",
            "Use Dependency Injection patterns.",
        ],
    },
    StackProfile {
        key: "backend-node",
        label: "Backend: Node.js (Express)",
        rules: &[
            "Prefer Async/Await over raw Promises.",
            "Follow Error Handling best practices (don't ignore errors).",
            "Use Environment Variables for configuration.",
            "Adhere to RESTful API standards.",
        ],
    },
    StackProfile {
        key: "backend-python-fastapi",
        label: "Backend: Python (FastAPI)",
        rules: &[
            "Use Pydantic models for data validation.",
            "Use Type Hints for function arguments and return values.",
            "Implement async/await for I/O bound operations.",
            "Follow PEP 8 style guidelines.",
        ],
    },
    StackProfile {
        key: "backend-java-spring",
        label: "Backend: Java (Spring Boot)",
        rules: &[
            "Use constructor injection over @Autowired.",
            "Follow Google Java Style Guide.",
            "Use Lombok to reduce boilerplate code.",
            "Handle exceptions with @ControllerAdvice.",
        ],
    },
    StackProfile {
        key: "backend-go",
        label: "Backend: Go (Golang)",
        rules: &[
            "Handle errors explicitly (if err != nil).",
            "Follow strict formatting (gofmt).",
            "Prefer standard library over external dependencies when possible.",
            "Use context for cancellation and timeouts.",
        ],
    },
    StackProfile {
        key: "mobile-flutter",
        label: "Mobile: Flutter",
        rules: &[
            "Use const constructors whenever possible.",
            "Prefer Composition over Inheritance.",
            "Manage state with Riverpod or BLoC.",
            "Follow Effective Dart guidelines.",
        ],
    },
    StackProfile {
        key: "data-python",
        label: "Data Science: Python",
        rules: &[
            "Use Pandas vectorization over loops.",
            "Document notebooks with Markdown cells explaining logic.",
            "Use Type Hints even in scripts.",
            "Prefer Polars for large datasets if possible.",
        ],
    },
    StackProfile {
        key: "infra-terraform",
        label: "Infra: Terraform",
        rules: &[
            "Use modules for reusable resources.",
            "Keep state remote and locked.",
            "Format code with `terraform fmt`.",
            "Avoid hardcoding values; use variables.",
        ],
    },
];

pub fn find_profile(key: &str) -> Option<&'static StackProfile> {
    STACK_PROFILES.iter().find(|p| p.key == key)
}

/// The profile's rules as newline-separated text, ready to join with
/// the run's global rules.
pub fn profile_rules_text(key: &str) -> Result<String> {
    let profile = find_profile(key).ok_or_else(|| SddError::UnknownProfile(key.to_string()))?;
    Ok(profile.rules.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = STACK_PROFILES.iter().map(|p| p.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), STACK_PROFILES.len());
    }

    #[test]
    fn generic_profile_has_no_rules() {
        assert_eq!(profile_rules_text("generic").unwrap(), "");
    }

    #[test]
    fn profile_rules_are_newline_joined() {
        let text = profile_rules_text("backend-go").unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Handle errors explicitly"));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = profile_rules_text("cobol-mainframe").unwrap_err();
        assert!(matches!(err, SddError::UnknownProfile(_)));
    }
}
