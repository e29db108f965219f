use comfy_table::{presets::UTF8_FULL, Cell, Table};
use core_types::YearRange;
use dashboard::{Chart, Dashboard, EntitySelection, YearSelection};

/// Prints the overview KPIs and the win leaderboards for `years`.
pub fn print_summary(dashboard: &Dashboard, years: YearRange) {
    let selection = YearSelection::new(Some(years.from), Some(years.to));
    let overview = dashboard.overview(selection);

    println!("{}", overview.caption);

    let mut kpis = Table::new();
    kpis.load_preset(UTF8_FULL)
        .set_header(vec!["Races", "Drivers", "Constructors", "Countries"])
        .add_row(vec![
            Cell::new(overview.kpis.races),
            Cell::new(overview.kpis.drivers),
            Cell::new(overview.kpis.constructors),
            Cell::new(overview.kpis.countries),
        ]);
    println!("{kpis}");

    let drivers = dashboard.drivers(selection, &EntitySelection::Default);
    let constructors = dashboard.constructors(selection, &EntitySelection::Default);
    for chart in [&drivers.most_wins, &constructors.most_wins, &overview.driver_poles] {
        println!("{}", render(chart));
    }
}

fn render(chart: &Chart) -> String {
    match chart {
        Chart::Bar(bar) => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["#", bar.category_axis.as_str(), bar.value_axis.as_str()]);
            for (rank, entry) in bar.bars.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(rank + 1),
                    Cell::new(&entry.label),
                    Cell::new(entry.value),
                ]);
            }
            format!("{}\n{table}", bar.title)
        }
        Chart::Empty(empty) => format!("{}\n  {}", empty.title, empty.message),
        other => other.title().to_string(),
    }
}
