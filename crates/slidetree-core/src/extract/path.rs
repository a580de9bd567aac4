use crate::pml::geometry::EMU_PER_POINT;
use crate::xml::{XmlNode, A};

/// SVG path data for `a:custGeom/a:pathLst`, in points, scaled so each
/// `a:path` coordinate space (`w` × `h`) fills `width` × `height`.
pub fn custom_path(cust_geom: XmlNode<'_>, width: f64, height: f64) -> String {
    let Some(path_lst) = cust_geom.child(&A::pathLst()) else {
        return String::new();
    };

    let mut commands = Vec::new();
    for path in path_lst.children_named(A::path()) {
        let scale = |extent: Option<i64>, target: f64| match extent {
            Some(e) if e > 0 => target / e as f64,
            _ => 1.0 / EMU_PER_POINT,
        };
        let sx = scale(path.attr_i64("w"), width);
        let sy = scale(path.attr_i64("h"), height);
        let point = |pt: XmlNode<'_>| {
            (
                pt.attr_i64("x").unwrap_or(0) as f64 * sx,
                pt.attr_i64("y").unwrap_or(0) as f64 * sy,
            )
        };

        let mut current = (0.0, 0.0);
        for command in path.children() {
            let points: Vec<(f64, f64)> = command.children_named(A::pt()).map(point).collect();
            match command.local_name() {
                "moveTo" | "lnTo" => {
                    if let Some(&p) = points.first() {
                        let op = if command.is(&A::moveTo()) { "M" } else { "L" };
                        commands.push(format!("{} {} {}", op, num(p.0), num(p.1)));
                        current = p;
                    }
                }
                "cubicBezTo" if points.len() >= 3 => {
                    commands.push(format!("C {}", join_points(&points[..3])));
                    current = points[2];
                }
                "quadBezTo" if points.len() >= 2 => {
                    commands.push(format!("Q {}", join_points(&points[..2])));
                    current = points[1];
                }
                "arcTo" => {
                    let rx = command.attr_i64("wR").unwrap_or(0) as f64 * sx;
                    let ry = command.attr_i64("hR").unwrap_or(0) as f64 * sy;
                    let start = (command.attr_i64("stAng").unwrap_or(0) as f64 / 60_000.0).to_radians();
                    let swing = command.attr_i64("swAng").unwrap_or(0) as f64 / 60_000.0;
                    let end_angle = start + swing.to_radians();

                    let cx = current.0 - rx * start.cos();
                    let cy = current.1 - ry * start.sin();
                    let end = (cx + rx * end_angle.cos(), cy + ry * end_angle.sin());
                    let large_arc = u8::from(swing.abs() > 180.0);
                    let sweep = u8::from(swing > 0.0);
                    commands.push(format!(
                        "A {} {} 0 {} {} {} {}",
                        num(rx),
                        num(ry),
                        large_arc,
                        sweep,
                        num(end.0),
                        num(end.1)
                    ));
                    current = end;
                }
                "close" => commands.push("Z".to_string()),
                _ => {}
            }
        }
    }
    commands.join(" ")
}

fn join_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{} {}", num(*x), num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn num(v: f64) -> f64 {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parser::parse;

    fn path_of(xml: &str, width: f64, height: f64) -> String {
        let doc = parse(&format!(
            r#"<a:custGeom xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:pathLst>{xml}</a:pathLst></a:custGeom>"#
        ))
        .unwrap();
        custom_path(doc.root_node().unwrap(), width, height)
    }

    #[test]
    fn lines_scale_into_the_frame() {
        let d = path_of(
            r#"<a:path w="100" h="50">
                <a:moveTo><a:pt x="0" y="0"/></a:moveTo>
                <a:lnTo><a:pt x="100" y="0"/></a:lnTo>
                <a:lnTo><a:pt x="100" y="50"/></a:lnTo>
                <a:close/>
            </a:path>"#,
            200.0,
            100.0,
        );
        assert_eq!(d, "M 0 0 L 200 0 L 200 100 Z");
    }

    #[test]
    fn beziers_emit_all_control_points() {
        let d = path_of(
            r#"<a:path w="10" h="10">
                <a:moveTo><a:pt x="0" y="10"/></a:moveTo>
                <a:cubicBezTo><a:pt x="0" y="0"/><a:pt x="10" y="0"/><a:pt x="10" y="10"/></a:cubicBezTo>
                <a:quadBezTo><a:pt x="5" y="5"/><a:pt x="0" y="10"/></a:quadBezTo>
            </a:path>"#,
            10.0,
            10.0,
        );
        assert_eq!(d, "M 0 10 C 0 0 10 0 10 10 Q 5 5 0 10");
    }

    #[test]
    fn quarter_arc_ends_on_the_ellipse() {
        let d = path_of(
            r#"<a:path w="100" h="100">
                <a:moveTo><a:pt x="100" y="50"/></a:moveTo>
                <a:arcTo wR="50" hR="50" stAng="0" swAng="5400000"/>
            </a:path>"#,
            100.0,
            100.0,
        );
        assert_eq!(d, "M 100 50 A 50 50 0 0 1 50 100");
    }

    #[test]
    fn missing_path_list_is_empty() {
        let doc = parse(r#"<a:custGeom xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"/>"#).unwrap();
        assert_eq!(custom_path(doc.root_node().unwrap(), 1.0, 1.0), "");
    }
}
