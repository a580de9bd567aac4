use crate::pml::result::{ChartData, ChartPoint, ChartSeries};
use crate::xml::{XmlNode, C};
use std::collections::HashMap;

/// Chart type, series and display options of a `c:plotArea`. `None` when the
/// plot area holds no chart-type element.
pub fn extract_chart(plot_area: XmlNode<'_>) -> Option<ChartData> {
    let plot = plot_area
        .children()
        .find(|c| c.local_name().ends_with("Chart"))?;

    let val_of = |name| plot.child(&name).and_then(|n| n.attr("val"));

    Some(ChartData {
        chart_type: plot.local_name().to_string(),
        data: plot.children_named(C::ser()).map(series_of).collect(),
        bar_dir: val_of(C::barDir()).map(str::to_string),
        grouping: val_of(C::grouping()).map(str::to_string),
        hole_size: val_of(C::holeSize()).and_then(|v| v.parse().ok()),
        marker: plot.child(&C::marker()).map(|m| m.attr("val") != Some("0")),
        style: plot_area
            .doc
            .root_node()
            .and_then(|root| root.child(&C::style()))
            .and_then(|s| s.attr("val"))
            .map(str::to_string),
    })
}

fn series_of(ser: XmlNode<'_>) -> ChartSeries {
    let key = ser
        .child(&C::tx())
        .and_then(|tx| tx.descendants_named(C::v()).next())
        .map(|v| v.text())
        .unwrap_or_default();

    let (labels, values) = match (ser.child(&C::xVal()), ser.child(&C::yVal())) {
        (x, Some(y)) => (x, y),
        _ => match ser.child(&C::val()) {
            Some(val) => (ser.child(&C::cat()), val),
            None => return ChartSeries { key, values: Vec::new() },
        },
    };

    let labels: HashMap<i64, String> = labels.map(cache_points).unwrap_or_default().into_iter().collect();
    let values = cache_points(values)
        .into_iter()
        .filter_map(|(idx, v)| {
            Some(ChartPoint {
                x: labels.get(&idx).cloned().unwrap_or_else(|| idx.to_string()),
                y: v.trim().parse().ok()?,
            })
        })
        .collect();

    ChartSeries { key, values }
}

/// `(idx, v)` of every cached or literal `c:pt` below a data reference.
fn cache_points(data: XmlNode<'_>) -> Vec<(i64, String)> {
    data.descendants_named(C::pt())
        .map(|pt| {
            let idx = pt.attr_i64("idx").unwrap_or(0);
            let v = pt.child(&C::v()).map(|v| v.text()).unwrap_or_default();
            (idx, v)
        })
        .collect()
}
