//! Plain markdown instruction files: workflows, rules, and single-file
//! workspace instructions.

use super::builder::{yaml_scalar, DocBuilder};
use super::RenderOptions;
use crate::agent::Agent;
use crate::locale::language_rule;

pub const KILO_HEADER: &str = "<!--- Kilo Code Agent Config --->";
pub const CLINE_HEADER: &str = "<!--- Cline Agent Config --->";

/// Workflow markdown shared by Kilo Code and Cline; only the header comment differs.
pub fn workflow_markdown(agent: &Agent, _opts: &RenderOptions, header: &str) -> String {
    DocBuilder::new()
        .line(header)
        .blank()
        .heading(1, &format!("{} {}", agent.name, agent.emoji))
        .blank()
        .line(format!("**Role**: {}", agent.role))
        .blank()
        .heading(2, "Instructions")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Constraints", &agent.rules)
        .build()
}

/// Cursor rule file with glob scoping.
pub fn cursor_mdc(agent: &Agent, _opts: &RenderOptions) -> String {
    DocBuilder::new()
        .frontmatter(&[
            ("description", yaml_scalar(agent.summary())),
            ("globs", cursor_globs(&agent.slug).to_string()),
        ])
        .blank()
        .heading(1, &format!("{} {}", agent.name, agent.emoji))
        .line(format!("Role: {}", agent.role))
        .blank()
        .heading(2, "Instructions")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Rules", &agent.rules)
        .build()
}

/// File globs a Cursor rule applies to, inferred from the agent slug.
/// When several keyword groups match, the last one wins.
pub fn cursor_globs(slug: &str) -> &'static str {
    const GROUPS: &[(&[&str], &str)] = &[
        (&["test", "qa"], "*.test.*, *.spec.*, **/tests/**"),
        (&["css", "style"], "*.css, *.scss, *.tailwind"),
        (&["sql", "db"], "*.sql, *.prisma, *.schema"),
    ];
    let slug = slug.to_lowercase();
    GROUPS
        .iter()
        .rev()
        .find(|(keywords, _)| keywords.iter().any(|k| slug.contains(k)))
        .map(|(_, globs)| *globs)
        .unwrap_or("*")
}

/// `.github/copilot-instructions.md` for the primary agent, and per-agent
/// files under `.github/agents/`.
pub fn copilot_instructions(agent: &Agent, opts: &RenderOptions) -> String {
    DocBuilder::new()
        .line(format!("<!-- GitHub Copilot Instructions for {} -->", agent.name))
        .blank()
        .heading(1, "Identity and Role")
        .line(format!("You are **{}** {}.", agent.name, agent.emoji))
        .line(format!("**Role**: {}", agent.role))
        .blank()
        .heading(2, "Core Instructions")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Rules & Guidelines", &agent.rules)
        .heading(2, "Response Style")
        .line("- Be concise and objective.")
        .line("- Follow the conventions already present in the project.")
        .line(format!("- {}", language_rule(opts.locale)))
        .build()
}

pub fn windsurf_rules(agent: &Agent, _opts: &RenderOptions) -> String {
    DocBuilder::new()
        .heading(1, &format!("{} {} Rules", agent.name, agent.emoji))
        .line(format!("Role: {}", agent.role))
        .blank()
        .heading(2, "Core Logic")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Guidelines", &agent.rules)
        .build()
}

pub fn trae_rules(agent: &Agent, _opts: &RenderOptions) -> String {
    DocBuilder::new()
        .line("<!-- Trae Workspace Rules -->")
        .heading(1, &format!("{} {}", agent.name, agent.emoji))
        .line(format!("**Role**: {}", agent.role))
        .blank()
        .heading(2, "Context & Instructions")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Constraints", &agent.rules)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::tests::sample_agent;
    use crate::locale::Locale;

    #[test]
    fn globs_follow_slug_keywords() {
        assert_eq!(cursor_globs("dev-coder"), "*");
        assert_eq!(cursor_globs("qa-tester"), "*.test.*, *.spec.*, **/tests/**");
        assert_eq!(cursor_globs("css-stylist"), "*.css, *.scss, *.tailwind");
        assert_eq!(cursor_globs("db-admin"), "*.sql, *.prisma, *.schema");
    }

    #[test]
    fn later_glob_group_wins() {
        assert_eq!(cursor_globs("test-db"), "*.sql, *.prisma, *.schema");
        assert_eq!(cursor_globs("style-qa"), "*.css, *.scss, *.tailwind");
    }

    #[test]
    fn cursor_frontmatter_carries_globs() {
        let doc = cursor_mdc(&sample_agent("qa.tester"), &RenderOptions::default());
        assert!(doc.starts_with(
            "---\ndescription: Builder\nglobs: *.test.*, *.spec.*, **/tests/**\n---\n"
        ));
        assert!(doc.contains("## Rules\n- Always reply in English unless told otherwise.\n"));
    }

    #[test]
    fn workflow_header_is_parameterized() {
        let agent = sample_agent("coder");
        let kilo = workflow_markdown(&agent, &RenderOptions::default(), KILO_HEADER);
        let cline = workflow_markdown(&agent, &RenderOptions::default(), CLINE_HEADER);
        assert!(kilo.starts_with(KILO_HEADER));
        assert!(cline.starts_with(CLINE_HEADER));
        assert_eq!(kilo.lines().skip(1).collect::<Vec<_>>(), cline.lines().skip(1).collect::<Vec<_>>());
        assert!(kilo.contains("## Constraints\n"));
    }

    #[test]
    fn copilot_response_style_ends_with_locale_rule() {
        let opts = RenderOptions { locale: Locale::Es };
        let doc = copilot_instructions(&sample_agent("coder"), &opts);
        assert!(doc.contains("# Identity and Role\nYou are **Coder** 🤖.\n"));
        assert!(doc.ends_with(&format!("- {}\n", language_rule(Locale::Es))));
    }

    #[test]
    fn single_file_rules_omit_empty_sections() {
        let mut agent = sample_agent("coder");
        agent.rules.clear();
        let windsurf = windsurf_rules(&agent, &RenderOptions::default());
        let trae = trae_rules(&agent, &RenderOptions::default());
        assert!(!windsurf.contains("## Guidelines"));
        assert!(!trae.contains("## Constraints"));
        assert!(windsurf.starts_with("# Coder 🤖 Rules\nRole: Builder\n"));
        assert!(trae.contains("## Context & Instructions\nWrite clean code for the user.\n"));
    }
}
