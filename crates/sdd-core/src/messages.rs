//! Fixed user-facing strings for the CLI, keyed by dotted identifiers.

use crate::locale::Locale;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    ("install.loading", "Loading definitions..."),
    ("install.no_agents", "No valid agents found."),
    ("install.installing", "Installing agents for: {tools}"),
    ("install.finished", "Installation finished!"),
    ("install.custom_modes_notice", "Remember to configure Custom Modes in settings.json for Roo/Cline."),
    ("install.skipped", "Skipped {count} definition(s); see warnings above."),
    ("upgrade.detected", "Tools detected: {tools}"),
    ("upgrade.no_config", "No existing configuration detected for upgrade. Run 'sdd install --tool <name>' first."),
    ("upgrade.success", "Agents updated successfully!"),
    ("view.no_config", "No .sdd-toolkit/config.yaml yet. Run 'sdd install' to create one."),
];

const PT_BR: Table = &[
    ("install.loading", "Carregando definições..."),
    ("install.no_agents", "Nenhum agente válido encontrado."),
    ("install.installing", "Instalando agentes para: {tools}"),
    ("install.finished", "Instalação finalizada!"),
    ("install.custom_modes_notice", "Lembre-se de configurar os Custom Modes em settings.json para Roo/Cline."),
    ("install.skipped", "{count} definição(ões) ignorada(s); veja os avisos acima."),
    ("upgrade.detected", "Ferramentas detectadas: {tools}"),
    ("upgrade.no_config", "Nenhuma configuração existente detectada. Execute 'sdd install --tool <nome>' primeiro."),
    ("upgrade.success", "Agentes atualizados com sucesso!"),
    ("view.no_config", "Ainda não existe .sdd-toolkit/config.yaml. Execute 'sdd install' para criá-lo."),
];

const ES: Table = &[
    ("install.loading", "Cargando definiciones..."),
    ("install.no_agents", "No se encontraron agentes válidos."),
    ("install.installing", "Instalando agentes para: {tools}"),
    ("install.finished", "¡Instalación finalizada!"),
    ("install.custom_modes_notice", "Recuerde configurar los Custom Modes en settings.json para Roo/Cline."),
    ("install.skipped", "Se omitieron {count} definición(es); vea las advertencias arriba."),
    ("upgrade.detected", "Herramientas detectadas: {tools}"),
    ("upgrade.no_config", "No se detectó ninguna configuración existente. Ejecute 'sdd install --tool <nombre>' primero."),
    ("upgrade.success", "¡Agentes actualizados con éxito!"),
    ("view.no_config", "Todavía no existe .sdd-toolkit/config.yaml. Ejecute 'sdd install' para crearlo."),
];

fn table(locale: Locale) -> Table {
    match locale {
        Locale::En => EN,
        Locale::PtBr => PT_BR,
        Locale::Es => ES,
    }
}

fn find(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up `key` for `locale`, falling back to English, then to the key itself.
pub fn lookup(locale: Locale, key: &str) -> String {
    find(table(locale), key)
        .or_else(|| find(EN, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Look up `key` and substitute `{name}` placeholders.
pub fn format(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut msg = lookup(locale, key);
    for (name, value) in args {
        msg = msg.replace(&format!("{{{name}}}"), value);
    }
    msg
}
