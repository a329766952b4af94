use crate::output::{print_json, print_table};
use sdd_core::Target;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let targets: Vec<_> = Target::all()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "key": t.as_str(),
                    "label": t.label(),
                    "files": t.hint(),
                })
            })
            .collect();
        return print_json(&targets);
    }

    let rows = Target::all()
        .iter()
        .map(|t| vec![t.as_str().to_string(), t.label().to_string(), t.hint().to_string()])
        .collect();
    print_table(&["KEY", "TOOL", "FILES"], rows);
    Ok(())
}
