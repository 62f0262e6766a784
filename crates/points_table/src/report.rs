//! Points table reporting

use crate::standings::TeamStanding;

/// Render a computed table as plain text
pub fn render_table(standings: &[TeamStanding]) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>3} {:>4}\n",
        "Pos", "Team", "P", "W", "L", "T", "NR", "Pts"
    ));
    report.push_str(&"-".repeat(50));
    report.push('\n');

    if standings.is_empty() {
        report.push_str("(no matches)\n");
        return report;
    }

    for (pos, row) in standings.iter().enumerate() {
        report.push_str(&format!(
            "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>3} {:>4}\n",
            pos + 1,
            row.team,
            row.played,
            row.won,
            row.lost,
            row.tied,
            row.no_result,
            row.points
        ));
    }

    report
}

/// Print table to stdout
pub fn print_table(standings: &[TeamStanding]) {
    println!("{}", render_table(standings));
}
