mod helpers;

use celi::ladder::lore::celestial_table;
use celi::ladder::resolve_rank;
use helpers::boundary_table;

#[test]
fn boundary_resolutions() {
    let table = boundary_table();

    let r = resolve_rank(0, &table);
    assert_eq!((r.rank_name.as_str(), r.sub_level_roman.as_str()), ("Observer", "III"));
    assert_eq!(r.progress_fraction, 0.0);

    let r = resolve_rank(5, &table);
    assert_eq!((r.rank_name.as_str(), r.sub_level_roman.as_str()), ("Observer", "I"));
    assert_eq!(r.progress_fraction, 0.5);

    let r = resolve_rank(6, &table);
    assert_eq!((r.rank_name.as_str(), r.sub_level_roman.as_str()), ("Moonwalker", "III"));
    assert_eq!(r.progress_fraction, 0.0);

    let r = resolve_rank(1000, &table);
    assert_eq!((r.rank_name.as_str(), r.sub_level_roman.as_str()), ("Moonwalker", "I"));
    assert_eq!(r.progress_fraction, 1.0);
    assert!(r.saturated);
}

#[test]
fn every_point_total_walks_sub_levels_in_order() {
    let table = boundary_table();
    let titles: Vec<String> = (0..14).map(|p| resolve_rank(p, &table).title).collect();
    assert_eq!(
        titles,
        [
            "Observer III",
            "Observer III",
            "Observer II",
            "Observer II",
            "Observer I",
            "Observer I",
            "Moonwalker III",
            "Moonwalker III",
            "Moonwalker II",
            "Moonwalker II",
            "Moonwalker I",
            "Moonwalker I",
            "Moonwalker I",
            "Moonwalker I",
        ]
    );
}

#[test]
fn steps_never_decrease_as_points_grow() {
    let table = celestial_table().unwrap();
    let mut previous = 0;
    for points in 0..=table.ceiling() + 50 {
        let step = resolve_rank(points, &table).step;
        assert!(step >= previous, "step went backwards at {points}");
        previous = step;
    }
    assert_eq!(previous, table.total_steps() - 1);
}

#[test]
fn celestial_rank_boundaries() {
    let table = celestial_table().unwrap();

    assert_eq!(resolve_rank(59, &table).title, "Observer I");
    assert_eq!(resolve_rank(60, &table).title, "Moonwalker III");
    assert_eq!(resolve_rank(210, &table).title, "Celestial IV");
    assert_eq!(resolve_rank(2160, &table).title, "Intergalactic V");
    assert_eq!(resolve_rank(3060, &table).title, "Ethereal VI");
    assert_eq!(resolve_rank(4259, &table).title, "Ethereal I");

    let top = resolve_rank(4260, &table);
    assert_eq!(top.title, "Ethereal I");
    assert!(top.saturated);
    assert_eq!(top.progress_percent, 100);
}

#[test]
fn points_to_next_sub_level() {
    let table = celestial_table().unwrap();
    let r = resolve_rank(75, &table);
    assert_eq!(r.title, "Moonwalker III");
    assert_eq!(r.points_to_next_sub_level, 35);
    assert_eq!(r.progress_percent, 30);
    assert_eq!(r.phase_label, "The Departure");
    assert_eq!(r.psyche.as_deref(), Some("The First Step"));
}
