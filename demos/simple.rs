use name_presets::{CanonicalResolver, FrequencyList, FREQUENCY_PRESET_REGISTRY};

fn main() -> Result<(), name_presets::Error> {
    env_logger::init();

    let nicknames = CanonicalResolver::from_preset("NICKNAMES")?;

    for name in ["billy", "peggy", "ted", "Trinity"] {
        println!("{} -> {}", name, nicknames.resolve(name));
    }

    for preset in FREQUENCY_PRESET_REGISTRY.names() {
        let list = FrequencyList::from_preset(preset)?;

        println!("Most common names in {}:", preset);
        for name in list.top(5) {
            println!("{}: {:.5}", name, list.frequency(name));
        }
    }

    Ok(())
}
