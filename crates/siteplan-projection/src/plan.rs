//! 2D schematic projection
//!
//! Derives the flat drawable primitives of the plan view: the plot with
//! its subtractive mask holes, the road network, the parking apron,
//! building footprints, the courtyard fountain, and perimeter tree rows.

use serde::Serialize;
use siteplan_scene::{PerimeterSide, Scene};

/// Inset of perimeter tree rows from the plot edge, in meters
const TREE_INSET: f64 = 2.0;
/// Tree disc radius in the schematic
const TREE_RADIUS: f64 = 1.5;
/// Fountain disc radius in the schematic
const FOUNTAIN_RADIUS: f64 = 3.0;
/// Parking apron dimensions around the entrance point
const PARKING_HALF_WIDTH: f64 = 20.0;
const PARKING_DEPTH: f64 = 10.0;

/// Axis-aligned rectangle in plot coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Filled disc in plot coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Disc {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// The plot silhouette: outline rectangle minus mask holes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotFootprint {
    /// Full bounds rectangle
    pub outline: Rect,
    /// Subtracted holes
    pub holes: Vec<Rect>,
}

/// A stroked polyline with road width
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadPath {
    /// Polyline vertices
    pub points: Vec<(f64, f64)>,
    /// Stroke width in meters
    pub width: f64,
}

/// What a footprint rectangle represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FootprintKind {
    Office,
    Warehouse,
}

/// One building footprint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footprint {
    /// Entity id
    pub id: String,
    pub kind: FootprintKind,
    pub rect: Rect,
    /// Fill color (office color or warehouse wall color)
    pub fill: String,
}

/// Everything the 2D schematic draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanView {
    pub plot: PlotFootprint,
    /// Road polylines: entrance stem, east road, west turnaround
    pub roads: Vec<RoadPath>,
    pub parking_apron: Rect,
    pub footprints: Vec<Footprint>,
    /// Present when the courtyard carries a fountain
    pub fountain: Option<Disc>,
    pub trees: Vec<Disc>,
}

/// Derive the 2D schematic primitives from a scene
#[must_use]
pub fn plan_view(scene: &Scene) -> PlanView {
    let bounds = scene.plot.bounds;
    let entrance = scene.roads.north_entrance;

    let plot = PlotFootprint {
        outline: Rect {
            x: 0.0,
            y: 0.0,
            w: bounds.w,
            h: bounds.h,
        },
        holes: scene
            .plot
            .mask
            .iter()
            .map(|m| Rect {
                x: m.x,
                y: m.y,
                w: m.w,
                h: m.h,
            })
            .collect(),
    };

    let roads = vec![
        // Entrance stem from the north edge down to the entrance point.
        RoadPath {
            points: vec![(entrance.x, 0.0), (entrance.x, entrance.y)],
            width: scene.roads.width,
        },
        RoadPath {
            points: scene.roads.east.iter().map(|p| (p.x, p.y)).collect(),
            width: scene.roads.width,
        },
        RoadPath {
            points: scene
                .roads
                .west_turnaround_path
                .iter()
                .map(|p| (p.x, p.y))
                .collect(),
            width: scene.roads.width,
        },
    ];

    let parking_apron = Rect {
        x: entrance.x - PARKING_HALF_WIDTH,
        y: entrance.y,
        w: 2.0 * PARKING_HALF_WIDTH,
        h: PARKING_DEPTH,
    };

    let mut footprints: Vec<Footprint> = scene
        .offices
        .iter()
        .map(|o| Footprint {
            id: o.id.clone(),
            kind: FootprintKind::Office,
            rect: Rect {
                x: o.x,
                y: o.y,
                w: o.w,
                h: o.h,
            },
            fill: o.color.clone(),
        })
        .collect();
    footprints.push(Footprint {
        id: scene.warehouse.id.clone(),
        kind: FootprintKind::Warehouse,
        rect: Rect {
            x: scene.warehouse.x,
            y: scene.warehouse.y,
            w: scene.warehouse.w,
            h: scene.warehouse.h,
        },
        fill: scene.warehouse.wall_color.clone(),
    });

    let fountain = scene.courtyard.fountain.then(|| Disc {
        cx: scene.courtyard.x + scene.courtyard.w / 2.0,
        cy: scene.courtyard.y + scene.courtyard.h / 2.0,
        r: FOUNTAIN_RADIUS,
    });

    PlanView {
        plot,
        roads,
        parking_apron,
        footprints,
        fountain,
        trees: tree_row_discs(scene),
    }
}

/// Tree discs along every selected perimeter side, stepped by the
/// configured spacing and inset from the plot edge.
fn tree_row_discs(scene: &Scene) -> Vec<Disc> {
    let spacing = scene.landscape.tree_spacing;
    // A non-positive spacing would step forever.
    if spacing <= 0.0 {
        return Vec::new();
    }

    let bounds = scene.plot.bounds;
    let mut trees = Vec::new();
    let mut row = |side: PerimeterSide| {
        if !scene.landscape.perimeter.contains(&side) {
            return;
        }
        match side {
            PerimeterSide::N => along(bounds.w, spacing, |x| {
                trees.push(Disc { cx: x, cy: TREE_INSET, r: TREE_RADIUS });
            }),
            PerimeterSide::S => along(bounds.w, spacing, |x| {
                trees.push(Disc { cx: x, cy: bounds.h - TREE_INSET, r: TREE_RADIUS });
            }),
            PerimeterSide::W => along(bounds.h, spacing, |y| {
                trees.push(Disc { cx: TREE_INSET, cy: y, r: TREE_RADIUS });
            }),
            PerimeterSide::E => along(bounds.h, spacing, |y| {
                trees.push(Disc { cx: bounds.w - TREE_INSET, cy: y, r: TREE_RADIUS });
            }),
        }
    };
    row(PerimeterSide::N);
    row(PerimeterSide::W);
    row(PerimeterSide::S);
    row(PerimeterSide::E);
    trees
}

fn along(extent: f64, spacing: f64, mut place: impl FnMut(f64)) {
    let mut at = 0.0;
    while at < extent {
        place(at);
        at += spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use siteplan_scene::initial_scene;

    fn steps(extent: f64, spacing: f64) -> usize {
        let mut count = 0;
        let mut at = 0.0;
        while at < extent {
            count += 1;
            at += spacing;
        }
        count
    }

    #[test]
    fn plot_outline_matches_bounds() {
        let view = plan_view(&initial_scene());
        assert_eq!(view.plot.outline, Rect { x: 0.0, y: 0.0, w: 160.0, h: 120.0 });
        assert_eq!(view.plot.holes.len(), 1);
        assert_eq!(view.plot.holes[0], Rect { x: 120.0, y: 0.0, w: 40.0, h: 40.0 });
    }

    #[test]
    fn three_road_paths_are_derived() {
        let view = plan_view(&initial_scene());
        assert_eq!(view.roads.len(), 3);
        // Entrance stem runs from the north edge to the entrance point.
        assert_eq!(view.roads[0].points, vec![(80.0, 0.0), (80.0, 10.0)]);
        assert!(view.roads.iter().all(|r| (r.width - 6.0).abs() < f64::EPSILON));
    }

    #[test]
    fn parking_apron_sits_at_the_entrance() {
        let view = plan_view(&initial_scene());
        assert_eq!(view.parking_apron, Rect { x: 60.0, y: 10.0, w: 40.0, h: 10.0 });
    }

    #[test]
    fn footprints_cover_offices_and_warehouse() {
        let view = plan_view(&initial_scene());
        assert_eq!(view.footprints.len(), 3);
        assert_eq!(view.footprints[2].kind, FootprintKind::Warehouse);
        assert_eq!(view.footprints[2].fill, "#CBD5E0");
    }

    #[test]
    fn fountain_follows_the_courtyard_flag() {
        let mut scene = initial_scene();
        let with = plan_view(&scene);
        assert_eq!(with.fountain, Some(Disc { cx: 80.0, cy: 41.0, r: 3.0 }));

        scene.courtyard.fountain = false;
        assert_eq!(plan_view(&scene).fountain, None);
    }

    #[test]
    fn tree_rows_cover_selected_sides_only() {
        let scene = initial_scene();
        let view = plan_view(&scene);

        // N and S step along the width, W along the height; E is unselected.
        let expected = 2 * steps(160.0, 7.0) + steps(120.0, 7.0);
        assert_eq!(view.trees.len(), expected);
        assert!(view
            .trees
            .iter()
            .all(|t| (0.0..=160.0).contains(&t.cx) && (0.0..=120.0).contains(&t.cy)));
    }

    #[test]
    fn east_side_adds_a_row() {
        let mut scene = initial_scene();
        let before = plan_view(&scene).trees.len();

        scene.landscape.perimeter.push(siteplan_scene::PerimeterSide::E);
        let after = plan_view(&scene).trees.len();
        assert_eq!(after - before, steps(120.0, 7.0));
    }

    #[test]
    fn zero_spacing_yields_no_trees() {
        let mut scene = initial_scene();
        scene.landscape.tree_spacing = 0.0;
        assert!(plan_view(&scene).trees.is_empty());
    }

    #[test]
    fn projection_is_pure() {
        let scene = initial_scene();
        assert_eq!(plan_view(&scene), plan_view(&scene));
    }
}
