use chrono::{DateTime, Utc};
use dasha_core::{
    BirthBalance, DashaLevel, DashaMeta, DashaNode, DashaPeriod, DashaTimeline, Rashi, format_date,
};
use serde_json::json;

pub fn meta(meta: &DashaMeta) {
    let rashi = Rashi::from_longitude(meta.moon_longitude);
    println!(
        "Moon {:.4} deg in {} ({}), nakshatra {} ({}), {:.1}% elapsed",
        meta.moon_longitude,
        rashi.name(),
        rashi.western_name(),
        meta.nakshatra,
        meta.nakshatra_index,
        meta.elapsed_fraction * 100.0
    );
    println!(
        "Balance of {} mahadasha at birth: {:.4} years",
        meta.starting_lord, meta.balance_years
    );
    println!();
}

fn period_line(lords: &[&str], p: &DashaPeriod) -> String {
    format!(
        "{:<24} {}  {}  {:>9.4}y",
        lords.join(" / "),
        format_date(Some(p.start)),
        format_date(Some(p.end)),
        p.duration_years
    )
}

/// Print the timeline down to `depth`, one line per period at that depth.
pub fn tree(mahadashas: &[DashaNode], depth: DashaLevel) {
    println!("{:<24} {:<10}  {:<10}  {:>10}", "Period", "From", "To", "Length");
    let mut lords = Vec::with_capacity(3);
    for node in mahadashas {
        walk(node, depth, &mut lords);
    }
}

fn walk(node: &DashaNode, depth: DashaLevel, lords: &mut Vec<&'static str>) {
    lords.push(node.period.lord.abbrev());
    if node.period.level >= depth || node.children.is_empty() {
        println!("{}", period_line(lords, &node.period));
    } else {
        for child in &node.children {
            walk(child, depth, lords);
        }
    }
    lords.pop();
}

/// JSON for the timeline down to `depth`. The full depth keeps the flat
/// row shape; shallower depths list that level's periods.
pub fn timeline_json(timeline: &DashaTimeline, depth: DashaLevel) -> serde_json::Result<String> {
    if depth == DashaLevel::Pratyantardasha {
        return serde_json::to_string_pretty(timeline);
    }
    let value = json!({
        "meta": timeline.meta,
        "periods": timeline.periods_at_level(depth),
    });
    serde_json::to_string_pretty(&value)
}

pub fn nakshatra(balance: &BirthBalance) {
    let pos = &balance.position;
    println!("Nakshatra: {} (index {})", pos.nakshatra.name(), pos.index);
    println!(
        "Position:  {:.4} deg in, {:.4} fraction",
        pos.degrees_in_nakshatra(),
        pos.fraction
    );
    println!(
        "Lord:      {} ({}), balance {:.4} years",
        balance.lord,
        balance.lord.english_name(),
        balance.balance_years
    );
}

pub fn active(at: DateTime<Utc>, chain: &[DashaPeriod]) {
    if chain.is_empty() {
        println!("No dasha period active at {}", format_date(Some(at)));
        return;
    }
    println!("Active at {}:", format_date(Some(at)));
    for p in chain {
        println!(
            "  {:<16} {:<8} {}  {}",
            p.level.name(),
            p.lord.name(),
            format_date(Some(p.start)),
            format_date(Some(p.end))
        );
    }
}
