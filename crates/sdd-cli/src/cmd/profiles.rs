use crate::output::{print_json, print_table};
use sdd_core::profiles::STACK_PROFILES;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let profiles: Vec<_> = STACK_PROFILES
            .iter()
            .map(|p| serde_json::json!({ "key": p.key, "label": p.label, "rules": p.rules }))
            .collect();
        return print_json(&profiles);
    }

    let rows = STACK_PROFILES
        .iter()
        .map(|p| vec![p.key.to_string(), p.label.to_string(), p.rules.len().to_string()])
        .collect();
    print_table(&["KEY", "STACK", "RULES"], rows);
    Ok(())
}
