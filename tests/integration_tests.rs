//! Integration tests for rendering bitmaps to SVG

use gridsvg::{render, render_with_config, RenderConfig, Style, StyleProfile, SvgConfig};
use pretty_assertions::assert_eq;

fn paths(svg: &str) -> Vec<String> {
    svg.lines()
        .filter_map(|line| {
            let start = line.find(r#"d=""#)? + 3;
            let end = start + line[start..].find('"')?;
            Some(line[start..end].to_string())
        })
        .collect()
}

fn render_styled(text: &str, profile: StyleProfile) -> String {
    render_with_config(text, &RenderConfig::new().with_profile(profile)).unwrap()
}

#[test]
fn test_whole_document() {
    let svg = render("##\n#.").unwrap();
    insta::assert_snapshot!(svg.trim_end(), @r###"
    <?xml version="1.0" encoding="UTF-8" standalone="no"?>
    <svg width="100%" height="100%" viewBox="0 0 2 2" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
      <path d="M0 0 L2 0 L2 1 L1 1 L1 2 L0 2 Z" fill-rule="evenodd"/>
    </svg>
    "###);
}

#[test]
fn test_checkerboard_stays_separate() {
    let svg = render("#.\n.#").unwrap();
    assert_eq!(
        paths(&svg),
        vec!["M0 0 L1 0 L1 1 L0 1 Z", "M1 1 L2 1 L2 2 L1 2 Z"]
    );
}

#[test]
fn test_finder_pattern() {
    let finder = "\
#######
#.....#
#.###.#
#.###.#
#.###.#
#.....#
#######";
    let svg = render(finder).unwrap();
    assert_eq!(
        paths(&svg),
        vec![
            "M0 0 L7 0 L7 7 L0 7 Z M6 1 L1 1 L1 6 L6 6 Z",
            "M2 2 L5 2 L5 5 L2 5 Z",
        ]
    );
}

#[test]
fn test_margin_keeps_cells_apart() {
    let svg = render_styled("##", StyleProfile::default().with_pixel_margin(10));
    assert_eq!(
        paths(&svg),
        vec![
            "M0.05 0.05 L0.95 0.05 L0.95 0.95 L0.05 0.95 Z",
            "M1.05 0.05 L1.95 0.05 L1.95 0.95 L1.05 0.95 Z",
        ]
    );
}

#[test]
fn test_shape_optimization_can_be_disabled() {
    let config = RenderConfig::new().with_svg(SvgConfig::default().with_merge_shapes(false));
    let svg = render_with_config("###\n###", &config).unwrap();
    assert_eq!(paths(&svg).len(), 6);
    assert!(!svg.contains("evenodd"));
}

#[test]
fn test_dots_are_circles() {
    let svg = render_styled("#.#", StyleProfile::new(Style::Dots));
    let paths = paths(&svg);
    assert_eq!(paths.len(), 2);
    assert_eq!(
        paths[1],
        "M2 0.5 A0.5 0.5 0 0 1 2.5 0 A0.5 0.5 0 0 1 3 0.5 A0.5 0.5 0 0 1 2.5 1 A0.5 0.5 0 0 1 2 0.5 Z"
    );
}

#[test]
fn test_liquid_block_is_rounded_rectangle() {
    let svg = render_styled("##\n##", StyleProfile::new(Style::LiquidDots));
    assert_eq!(
        paths(&svg),
        vec![
            "M0.5 0 L1.5 0 A0.5 0.5 0 0 1 2 0.5 L2 1.5 A0.5 0.5 0 0 1 1.5 2 \
             L0.5 2 A0.5 0.5 0 0 1 0 1.5 L0 0.5 A0.5 0.5 0 0 1 0.5 0 Z"
        ]
    );
}

#[test]
fn test_holes_cut_round_hole() {
    let svg = render_styled("###\n#.#\n###", StyleProfile::new(Style::Holes));
    assert_eq!(
        paths(&svg),
        vec![
            "M0 0 L3 0 L3 3 L0 3 Z \
             M1 1.5 A0.5 0.5 0 0 1 1.5 1 A0.5 0.5 0 0 1 2 1.5 \
             A0.5 0.5 0 0 1 1.5 2 A0.5 0.5 0 0 1 1 1.5 Z"
        ]
    );
}

#[test]
fn test_border_shifts_cells() {
    let svg = render_styled("#", StyleProfile::default().with_border(2));
    assert!(svg.contains(r#"viewBox="0 0 5 5""#));
    assert_eq!(paths(&svg), vec!["M2 2 L3 2 L3 3 L2 3 Z"]);
}

#[test]
fn test_output_is_deterministic() {
    let art = "#.##.#\n##..##\n.####.\n#.#.#.";
    for style in [Style::Standard, Style::Dots, Style::Holes, Style::LiquidDots, Style::LiquidHoles] {
        let profile = StyleProfile::new(style).with_corner_radius(60);
        assert_eq!(
            render_styled(art, profile.clone()),
            render_styled(art, profile)
        );
    }
}

#[test]
fn test_partial_radius_notches_merge_cleanly() {
    let ring = "###\n#.#\n###";
    let blob = "#.##.#\n##..##\n.####.\n#.#.#.";
    for style in [Style::Holes, Style::LiquidHoles] {
        let profile = StyleProfile::new(style).with_corner_radius(50);

        let ring_paths = paths(&render_styled(ring, profile.clone()));
        assert_eq!(ring_paths.len(), 1, "{style:?}");
        assert!(ring_paths[0].contains(" A0.25 0.25 "), "{style:?}");

        let svg = render_with_config(blob, &RenderConfig::new().with_profile(profile)).unwrap();
        for d in paths(&svg) {
            assert!(d.starts_with('M') && d.ends_with('Z'), "{style:?}: {d}");
            assert_eq!(d.matches('M').count(), d.matches('Z').count(), "{style:?}: {d}");
        }
    }
}
