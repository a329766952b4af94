use super::builder::DocBuilder;
use super::RenderOptions;
use crate::agent::Agent;

/// Copy-paste system prompt for chat UIs.
pub fn system_prompt(agent: &Agent, _opts: &RenderOptions) -> String {
    DocBuilder::new()
        .line(format!("You are {} {}", agent.name, agent.emoji))
        .line(format!("Role: {}", agent.role))
        .blank()
        .line("[SYSTEM INSTRUCTIONS]")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("[GUIDELINES]", &agent.rules)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::tests::sample_agent;

    #[test]
    fn plain_prompt_layout() {
        let out = system_prompt(&sample_agent("coder"), &RenderOptions::default());
        assert_eq!(
            out,
            "You are Coder 🤖\nRole: Builder\n\n[SYSTEM INSTRUCTIONS]\n\
             Write clean code for the user.\n\n[GUIDELINES]\n\
             - Always reply in English unless told otherwise.\n"
        );
    }
}
