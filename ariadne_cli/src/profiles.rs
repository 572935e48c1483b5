use ariadne_core::weighting::Profile;
use comfy_table::{Table, presets::UTF8_FULL};

pub fn run() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["profile", "mode", "speed cap", "description"]);

    for profile in Profile::ALL {
        let weighting = profile.weighting();
        let speed_cap = weighting
            .maximum_speed()
            .map_or("-".to_string(), |speed| format!("{speed} km/h"));

        table.add_row(vec![
            profile.name().to_string(),
            format!("{:?}", weighting.mode()),
            speed_cap,
            profile.description().to_string(),
        ]);
    }

    println!("{table}");
}
