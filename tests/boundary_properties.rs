//! Properties of the cell outline and merging pipeline

use gridsvg::geometry::{Corners, DecimalPoint, DirectionSet, Directions, Edges, Fixed, IntPoint};
use gridsvg::shape::{
    place_pixel, stitch_loops, Curve, CurveKey, Element, ElementCluster, Path, PixelShape,
    PixelStyle,
};

fn p(x: i32, y: i32) -> DecimalPoint {
    DecimalPoint::from_int(x, y)
}

fn place_all(cells: &[(i32, i32)], style: &PixelStyle) -> Vec<Element> {
    cells
        .iter()
        .flat_map(|&(x, y)| place_pixel(IntPoint::new(x, y), style))
        .collect()
}

fn squares(cells: &[(i32, i32)]) -> Vec<Element> {
    place_all(cells, &PixelStyle::standard())
}

fn merged(elements: Vec<Element>) -> Vec<Vec<Path>> {
    ElementCluster::find_clusters(elements)
        .iter()
        .map(|cluster| cluster.combined_paths().unwrap())
        .collect()
}

fn undirected(path: &Path) -> Vec<CurveKey> {
    let mut keys: Vec<_> = path.curves().iter().map(Curve::key).collect();
    keys.sort();
    keys
}

#[test]
fn test_curve_reverse_is_involution() {
    let curves = [
        Curve::line(p(0, 0), p(3, 0)),
        Curve::arc(p(1, 0), p(0, 1), Fixed::from_percent(50), true),
        Curve::arc(p(0, 1), p(1, 0), Fixed::from_percent(25), false),
    ];
    for curve in curves {
        assert_eq!(curve.reverse().reverse(), curve);
    }
}

#[test]
fn test_rotation_laws_hold_for_every_set() {
    for bits in 0..=u8::MAX {
        let set = Directions::from_bits(bits);
        assert_eq!(set.rotate(8), set);
        assert_eq!(set.opposite(), set.rotate(4));
        for a in -9..9 {
            for b in -9..9 {
                assert_eq!(set.rotate(a).rotate(b), set.rotate(a + b));
            }
        }
    }
}

#[test]
fn test_mirror_is_involution() {
    for corner in Corners::ALL {
        for edge in Edges::ALL {
            assert_eq!(corner.mirror(edge).mirror(edge), corner);
        }
    }
    for direction in Directions::ALL {
        for axis in Directions::ALL {
            assert_eq!(direction.mirror(axis).mirror(axis), direction);
        }
    }
}

#[test]
fn test_single_square_is_unit_square() {
    let clusters = merged(squares(&[(0, 0)]));
    assert_eq!(clusters.len(), 1);
    let path = &clusters[0][0];
    assert_eq!(path.len(), 4);
    assert!(path.is_closed());
    let sides = Path::new(vec![
        Curve::line(p(0, 0), p(1, 0)),
        Curve::line(p(1, 0), p(1, 1)),
        Curve::line(p(1, 1), p(0, 1)),
        Curve::line(p(0, 1), p(0, 0)),
    ]);
    assert_eq!(undirected(path), undirected(&sides));
}

#[test]
fn test_two_squares_form_one_loop() {
    let elements = squares(&[(0, 0), (1, 0)]);
    let curves: Vec<_> = elements
        .iter()
        .flat_map(|e| e.path.curves().iter().copied())
        .collect();
    let loops = stitch_loops(curves).unwrap();
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].len(), 6);

    let clusters = merged(elements);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 1);
    assert_eq!(clusters[0][0].len(), 4);
}

#[test]
fn test_margined_squares_form_two_loops() {
    let style = PixelStyle::from_percentages(PixelShape::Square, 10, 100);
    let clusters = merged(place_all(&[(0, 0), (1, 0)], &style));
    assert_eq!(clusters.len(), 2);
    assert!(clusters
        .iter()
        .all(|paths| paths.len() == 1 && paths[0].len() == 4));
}

#[test]
fn test_straight_run_has_single_top_and_bottom() {
    let n = 12;
    let cells: Vec<_> = (0..n).map(|x| (x, 5)).collect();
    let clusters = merged(squares(&cells));
    assert_eq!(clusters.len(), 1);
    let path = &clusters[0][0];
    assert_eq!(path.len(), 4);
    let keys = undirected(path);
    assert!(keys.contains(&Curve::line(p(0, 5), p(n, 5)).key()));
    assert!(keys.contains(&Curve::line(p(0, 6), p(n, 6)).key()));
}

#[test]
fn test_solid_block_is_one_loop() {
    let cells: Vec<_> = (0..3).flat_map(|y| (0..3).map(move |x| (x, y))).collect();
    let clusters = merged(squares(&cells));
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 1);
    assert_eq!(clusters[0][0].len(), 4);
}

#[test]
fn test_checkerboard_is_two_clusters() {
    let clusters = merged(squares(&[(0, 0), (1, 1)]));
    assert_eq!(clusters.len(), 2);
    assert!(clusters.iter().all(|paths| paths[0].len() == 4));
}

#[test]
fn test_isolated_inverted_corner() {
    let style = PixelStyle::with_shape(PixelShape::inverted(Corners::TOP_RIGHT));
    let elements = place_pixel(IntPoint::new(3, 3), &style);
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].connecting_quadrants, Corners::TOP_RIGHT);

    let clusters = merged(elements);
    let path = &clusters[0][0];
    assert!(path.is_closed());
    let arcs = path.curves().iter().filter(|c| !c.is_line()).count();
    assert_eq!((path.len(), arcs), (3, 1));
}

#[test]
fn test_loops_are_closed_and_partition_survivors() {
    // An irregular blob with a hole and a diagonal pinch
    let cells = [
        (0, 0), (1, 0), (2, 0), (3, 0),
        (0, 1), (3, 1),
        (0, 2), (1, 2), (2, 2), (3, 2), (4, 3),
    ];
    let elements = squares(&cells);
    let curves: Vec<_> = elements
        .iter()
        .flat_map(|e| e.path.curves().iter().copied())
        .collect();
    let loops = stitch_loops(curves).unwrap();
    assert!(loops.iter().all(Path::is_closed));

    let mut used: Vec<_> = loops.iter().flat_map(|l| l.curves().iter().map(Curve::key)).collect();
    let total = used.len();
    used.sort();
    used.dedup();
    assert_eq!(used.len(), total);
    // Outer ring of the 4x3 block plus its 2x1 hole, and the lone square
    assert_eq!(total, 14 + 6 + 4);
}
