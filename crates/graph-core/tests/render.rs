// File: crates/graph-core/tests/render.rs
// Purpose: Render-pass behavior against a recording surface: shared axes/rulers and
//          every chart-type strategy.

use graph_core::theme::{AREA_FILL, DEFAULT_DOT, DEFAULT_LINE};
use graph_core::{
    Chart, ChartOptions, ChartType, DrawCommand, LabelOverrides, PathData, Point,
    RecordingSurface, Series, StyleOverrides, TextAlign,
};
use skia_safe::Color;

fn chart(t: ChartType, data: Vec<(f64, f64)>, options: ChartOptions) -> Chart {
    Chart::new(t, data, &LabelOverrides::default(), &options).expect("valid config")
}

fn render(chart: &Chart) -> RecordingSurface {
    let mut surface = RecordingSurface::new(800.0, 600.0);
    chart.render(&mut surface);
    surface
}

/// Everything drawn after the last text primitive (the X axis title) is data.
fn data_commands(surface: &RecordingSurface) -> Vec<DrawCommand> {
    let last_text = surface
        .commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Text { .. }))
        .expect("axis titles are always drawn");
    surface.commands[last_text + 1..].to_vec()
}

fn polygons(surface: &RecordingSurface) -> Vec<Vec<Point>> {
    surface
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillPolygon { points, .. } => Some(points.clone()),
            _ => None,
        })
        .collect()
}

fn text_at<'a>(surface: &'a RecordingSurface, label: &str) -> (&'a f64, &'a f64, &'a TextAlign) {
    surface
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text { text, x, y, align, .. } if text == label => Some((x, y, align)),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no text '{label}'"))
}

fn thin_lines(surface: &RecordingSurface) -> usize {
    surface.count(|c| matches!(c, DrawCommand::StrokeLine { width, .. } if *width == 1.0))
}

#[test]
fn starts_by_clearing_then_draws_axes_through_origin() {
    let c = chart(ChartType::Line, vec![], ChartOptions::default().with_x_range(0.0, 10.0).with_y_range(0.0, 10.0));
    let s = render(&c);
    assert_eq!(s.commands[0], DrawCommand::Clear { width: 800.0, height: 600.0 });
    assert_eq!(
        s.commands[1],
        DrawCommand::StrokeLine { x0: 64.0, y0: 536.0, x1: 736.0, y1: 536.0, width: 2.0, color: Color::BLACK }
    );
    // origin pinned to the left edge, not left of it
    assert_eq!(
        s.commands[2],
        DrawCommand::StrokeLine { x0: 64.0, y0: 64.0, x1: 64.0, y1: 536.0, width: 2.0, color: Color::BLACK }
    );
}

#[test]
fn positive_ranges_get_only_positive_arrowheads() {
    let c = chart(ChartType::Line, vec![], ChartOptions::default().with_x_range(0.0, 10.0));
    let s = render(&c);
    let arrows = polygons(&s);
    assert_eq!(arrows.len(), 2);
    // +X tip right of the plot, +Y tip above it
    assert_eq!(arrows[0][0], Point::new(735.0 + 14.0, 536.0));
    assert_eq!(arrows[1][0], Point::new(64.0, 65.0 - 14.0));
    assert!(arrows.iter().flatten().all(|p| p.x >= 57.0 && p.y <= 543.0));
}

#[test]
fn negative_minimums_add_negative_arrowheads() {
    let one = render(&chart(ChartType::Line, vec![], ChartOptions::default().with_x_range(-5.0, 5.0)));
    let arrows = polygons(&one);
    assert_eq!(arrows.len(), 3);
    assert_eq!(arrows[2][0], Point::new(64.0 - 14.0, 536.0));

    let both = render(&chart(
        ChartType::Line,
        vec![],
        ChartOptions::default().with_x_range(-5.0, 5.0).with_y_range(-2.0, 2.0),
    ));
    let arrows = polygons(&both);
    assert_eq!(arrows.len(), 4);
    assert_eq!(arrows[3][0], Point::new(400.0, 536.0 + 14.0));
}

#[test]
fn default_rulers_label_every_quarter() {
    let s = render(&chart(ChartType::Line, vec![], ChartOptions::default()));
    let texts: Vec<&str> = s.texts().collect();
    assert_eq!(
        texts,
        vec![
            "Graph", "0", "0.25", "0.50", "0.75", "1", "0", "0.25", "0.50", "0.75", "1", "Y", "X"
        ]
    );
    // five major and four minor ticks per axis
    assert_eq!(thin_lines(&s), 18);
}

#[test]
fn header_is_centered_above_the_plot() {
    let s = render(&chart(ChartType::Line, vec![], ChartOptions::default()));
    assert_eq!(text_at(&s, "Graph"), (&400.0, &32.0, &TextAlign::Center));
}

#[test]
fn zero_label_is_skipped_on_an_axis_with_negative_minimum() {
    let s = render(&chart(ChartType::Line, vec![], ChartOptions::default().with_x_range(-2.0, 6.0)));
    let texts: Vec<&str> = s.texts().collect();
    assert_eq!(
        texts,
        vec!["Graph", "-2", "2", "4", "6", "0", "0.25", "0.50", "0.75", "1", "Y", "X"]
    );
    // the skipped tick loses its major mark but keeps the minor marks around it
    assert_eq!(thin_lines(&s), 4 + 4 + 5 + 4);
}

#[test]
fn x_labels_move_clear_of_negative_y_arrowhead() {
    let plain = render(&chart(ChartType::Line, vec![], ChartOptions::default().with_x_range(0.0, 4.0).with_y_range(0.0, 4.0)));
    assert_eq!(text_at(&plain, "1"), (&232.0, &556.0, &TextAlign::Center));

    let shifted = render(&chart(ChartType::Line, vec![], ChartOptions::default().with_x_range(0.0, 4.0).with_y_range(-4.0, 4.0)));
    // axis row at y = 300, pushed down by the 18px arrow clearance
    assert_eq!(text_at(&shifted, "1"), (&232.0, &338.0, &TextAlign::Center));
    assert!(shifted.commands.contains(&DrawCommand::StrokeLine {
        x0: 232.0,
        y0: 318.0,
        x1: 232.0,
        y1: 324.0,
        width: 1.0,
        color: Color::BLACK,
    }));
}

#[test]
fn y_labels_move_clear_of_negative_x_arrowhead() {
    let s = render(&chart(ChartType::Line, vec![], ChartOptions::default().with_x_range(-4.0, 4.0).with_y_range(0.0, 4.0)));
    let (x, y, align) = text_at(&s, "1");
    // axis column at x = 400, shifted left by 18, label 8px further left
    assert_eq!(*x, 374.0);
    assert!((*y - (418.0 + 14.0 * 0.3)).abs() < 1e-9);
    assert_eq!(*align, TextAlign::Right);
}

#[test]
fn rendering_twice_is_identical() {
    for t in ChartType::ALL {
        let c = chart(
            t,
            vec![(0.0, 1.0), (1.0, -2.0), (2.5, 3.0), (4.0, 0.5)],
            ChartOptions::default().with_x_range(-1.0, 5.0).with_y_range(-3.0, 4.0),
        );
        let mut s = RecordingSurface::new(800.0, 600.0);
        c.render(&mut s);
        c.render(&mut s);
        let half = s.commands.len() / 2;
        assert_eq!(s.commands.len(), half * 2);
        assert_eq!(s.commands[..half], s.commands[half..], "{t}");
        assert_eq!(s.frame(), &s.commands[half..]);
    }
}

#[test]
fn empty_series_draws_only_axes_and_rulers() {
    for t in ChartType::ALL {
        let s = render(&chart(t, vec![], ChartOptions::default()));
        assert!(data_commands(&s).is_empty(), "{t}");
        assert_eq!(s.count(|c| matches!(c, DrawCommand::FillRect { .. })), 0);
        assert_eq!(s.count(|c| matches!(c, DrawCommand::FillCircle { .. })), 0);
        assert_eq!(s.count(|c| matches!(c, DrawCommand::StrokePath { .. })), 0);
        assert_eq!(polygons(&s).len(), 2);
        assert_eq!(thin_lines(&s), 18);
    }
}

#[test]
fn line_marks_each_segment_start() {
    let c = chart(
        ChartType::Line,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (4.0, 4.0)],
        ChartOptions::default().with_x_range(0.0, 4.0).with_y_range(0.0, 4.0),
    );
    let pts = c.mapper(800.0, 600.0).map_points(c.series().points());
    let data = data_commands(&render(&c));
    assert_eq!(data.len(), 6);
    for (i, pair) in data.chunks(2).enumerate() {
        let (a, b) = (pts[i], pts[i + 1]);
        assert_eq!(
            pair[0],
            DrawCommand::StrokeLine { x0: a.x, y0: a.y, x1: b.x, y1: b.y, width: 2.0, color: DEFAULT_LINE }
        );
        assert_eq!(pair[1], DrawCommand::FillCircle { x: a.x, y: a.y, radius: 1.0, color: DEFAULT_DOT });
    }
    // the last point is never a segment start
    let last = pts[3];
    assert!(!data.iter().any(|c| matches!(c, DrawCommand::FillCircle { x, y, .. } if *x == last.x && *y == last.y)));

    let single = data_commands(&render(&chart(ChartType::Line, vec![(0.5, 0.5)], ChartOptions::default())));
    assert!(single.is_empty());
}

#[test]
fn dot_marks_every_point_without_lines() {
    let options = ChartOptions {
        style: StyleOverrides { dot_radius: Some(3.0), ..Default::default() },
        ..Default::default()
    };
    let c = chart(ChartType::Dot, vec![(0.0, 0.0), (0.5, 1.0), (1.0, 0.25)], options);
    let pts = c.mapper(800.0, 600.0).map_points(c.series().points());
    let data = data_commands(&render(&c));
    let want: Vec<DrawCommand> = pts
        .iter()
        .map(|p| DrawCommand::FillCircle { x: p.x, y: p.y, radius: 3.0, color: DEFAULT_DOT })
        .collect();
    assert_eq!(data, want);
}

#[test]
fn bar_width_depends_only_on_count() {
    let options = ChartOptions::default().with_x_range(0.0, 8.0).with_y_range(0.0, 10.0);
    let c = chart(ChartType::Bar, vec![(1.0, 2.0), (3.0, 5.0), (5.0, 8.0), (7.0, 1.0)], options.clone());
    let data = data_commands(&render(&c));
    assert_eq!(data.len(), 4);
    let pts = c.mapper(800.0, 600.0).map_points(c.series().points());
    for (cmd, p) in data.iter().zip(&pts) {
        match cmd {
            DrawCommand::FillRect { x, y, w, h, color } => {
                assert_eq!(*w, 84.0);
                assert_eq!(*x + w / 2.0, p.x);
                assert_eq!(*y, p.y);
                assert!((*y + h - 536.0).abs() < 1e-9);
                assert_eq!(*color, DEFAULT_LINE);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    let three = chart(ChartType::Bar, vec![(1.0, 9.0), (2.0, 0.1), (3.0, 4.0)], options);
    for cmd in data_commands(&render(&three)) {
        assert!(matches!(cmd, DrawCommand::FillRect { w, .. } if w == 112.0));
    }
}

#[test]
fn bars_grow_from_the_zero_row() {
    let c = chart(
        ChartType::Bar,
        vec![(4.0, -5.0), (6.0, 5.0)],
        ChartOptions::default().with_x_range(0.0, 8.0).with_y_range(-10.0, 10.0),
    );
    let data = data_commands(&render(&c));
    // zero row at y = 300; -5 maps to 418, +5 maps to 182
    assert!(matches!(data[0], DrawCommand::FillRect { y, h, .. } if y == 300.0 && h == 118.0));
    assert!(matches!(data[1], DrawCommand::FillRect { y, h, .. } if y == 182.0 && h == 118.0));
}

#[test]
fn area_closes_to_bottom_corners_and_matches_line_stroke() {
    let cases = [
        (vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)], (0.0, 4.0)),
        (vec![(0.0, -2.0), (1.0, -9.0), (2.0, -4.0)], (-10.0, -1.0)),
    ];
    for (data, (ymin, ymax)) in cases {
        let options = ChartOptions::default().with_x_range(0.0, 2.0).with_y_range(ymin, ymax);
        let area = data_commands(&render(&chart(ChartType::Area, data.clone(), options.clone())));
        match &area[0] {
            DrawCommand::FillPolygon { points, color } => {
                assert_eq!(points.len(), data.len() + 2);
                assert_eq!(points[points.len() - 2], Point::new(736.0, 536.0));
                assert_eq!(points[points.len() - 1], Point::new(64.0, 536.0));
                assert_eq!(*color, AREA_FILL);
            }
            other => panic!("expected fill first, got {other:?}"),
        }

        let line: Vec<DrawCommand> = data_commands(&render(&chart(ChartType::Line, data, options)))
            .into_iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .collect();
        assert_eq!(area[1..], line[..]);
    }
}

#[test]
fn step_draws_a_staircase() {
    let c = chart(
        ChartType::Step,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)],
        ChartOptions::default().with_x_range(0.0, 2.0).with_y_range(0.0, 2.0),
    );
    let data = data_commands(&render(&c));
    let seg = |x0, y0, x1, y1| DrawCommand::StrokeLine { x0, y0, x1, y1, width: 2.0, color: DEFAULT_LINE };
    assert_eq!(
        data,
        vec![
            seg(64.0, 536.0, 400.0, 536.0),
            seg(400.0, 536.0, 400.0, 64.0),
            seg(400.0, 64.0, 736.0, 64.0),
            seg(736.0, 64.0, 736.0, 300.0),
        ]
    );
}

#[test]
fn spline_is_one_quadratic_path_through_midpoints() {
    let c = chart(
        ChartType::Spline,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)],
        ChartOptions::default().with_x_range(0.0, 2.0).with_y_range(0.0, 2.0),
    );
    let data = data_commands(&render(&c));
    let (p0, p1, p2) = (Point::new(64.0, 536.0), Point::new(400.0, 64.0), Point::new(736.0, 300.0));
    let mut want = PathData::new();
    want.move_to(p0)
        .quad_to(p0, Point::new(232.0, 300.0))
        .quad_to(p1, Point::new(568.0, 182.0));
    assert_eq!(data, vec![DrawCommand::StrokePath { path: want, width: 2.0, color: DEFAULT_LINE }]);
    // ends short of the final point
    assert_ne!(p1.midpoint(p2), p2);

    let single = data_commands(&render(&chart(ChartType::Spline, vec![(0.5, 0.5)], ChartOptions::default())));
    assert!(single.is_empty());
}

#[test]
fn master_color_paints_everything() {
    let options = ChartOptions {
        style: StyleOverrides { master_color: Some(Color::RED), ..Default::default() },
        ..Default::default()
    };
    let s = render(&chart(ChartType::Line, vec![(0.0, 0.0), (1.0, 1.0)], options));
    for cmd in &s.commands {
        match cmd {
            DrawCommand::Clear { .. } => {}
            DrawCommand::FillRect { color, .. }
            | DrawCommand::StrokeLine { color, .. }
            | DrawCommand::FillCircle { color, .. }
            | DrawCommand::FillPolygon { color, .. }
            | DrawCommand::StrokePath { color, .. }
            | DrawCommand::Text { color, .. } => assert_eq!(*color, Color::RED, "{cmd:?}"),
        }
    }
}

#[test]
fn series_can_be_replaced_between_renders() {
    let mut c = chart(ChartType::Dot, vec![(0.5, 0.5)], ChartOptions::default());
    assert_eq!(data_commands(&render(&c)).len(), 1);

    c.set_series(Series::from_iter([(0.1, 0.1), (0.2, 0.2), (0.3, 0.3)]));
    assert_eq!(data_commands(&render(&c)).len(), 3);

    c.series_mut().push(0.4, 0.4);
    c.set_chart_type(ChartType::Step);
    assert_eq!(data_commands(&render(&c)).len(), 6);
}

#[test]
fn surface_smaller_than_padding_still_renders() {
    let c = chart(ChartType::Bar, vec![(0.5, 0.5)], ChartOptions::default());
    let mut s = RecordingSurface::new(50.0, 50.0);
    c.render(&mut s);
    assert!(matches!(s.commands[0], DrawCommand::Clear { .. }));
    assert!(s.commands.len() > 1);
}
