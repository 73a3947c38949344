use anyhow::Result;

use super::lines::{report_title, StatLine};
use crate::rating::{best_rating, RatingPoint};

/// Standalone page: stats grid plus a rating chart with the best (lowest) rating marked
pub fn render_html(subject: &str, lines: &[StatLine], series: &[RatingPoint]) -> Result<String> {
    let rows_html = lines
        .iter()
        .map(|line| {
            format!(
                "<div class='stat-key'>{}:</div>\n        <div class='stat-value{}'>{}</div>",
                escape_html(line.key),
                if line.available { "" } else { " missing" },
                escape_html(&line.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    let dates: Vec<String> = series.iter().map(|p| p.date.format("%Y-%m-%d").to_string()).collect();
    let ratings: Vec<f64> = series.iter().map(|p| p.rating).collect();
    let best = best_rating(series);

    let dates_js = script_json(&dates)?;
    let ratings_js = script_json(&ratings)?;
    let best_dates_js = script_json(&best.map(|p| p.date.format("%Y-%m-%d").to_string()).into_iter().collect::<Vec<_>>())?;
    let best_ratings_js = script_json(&best.map(|p| p.rating).into_iter().collect::<Vec<_>>())?;
    let title = escape_html(&format!("{subject}: Rating & Match Statistics (singles)"));
    let heading = escape_html(&report_title(subject));

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{heading}</title>
  <script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
  <style>
    body {{ font-family: Arial, sans-serif; background: #f4f4f9; margin: 0; }}
    .container {{ max-width: 960px; margin: 40px auto; background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); padding: 20px; }}
    h3 {{ text-align: center; color: #333; margin-bottom: 0.5em; }}
    #stats {{ display: grid; grid-template-columns: auto 1fr; gap: 8px 16px; background: #fafafa; border: 1px solid #ddd; border-radius: 6px; padding: 16px; font-family: 'Courier New', monospace; font-size: 14px; line-height: 1.5; margin-bottom: 2em; }}
    #stats .stat-key {{ font-weight: bold; color: #333; text-align: right; padding-right: 8px; }}
    #stats .stat-value {{ color: #555; }}
    #stats .stat-value.missing {{ color: #aaa; font-style: italic; }}
    #chart {{ width: 100%; height: 500px; }}
  </style>
</head>
<body>
  <div class="container">
    <h3>{title}</h3>
    <div id="stats">
        {rows_html}
    </div>
    <div id="chart"></div>
  </div>
  <script>
    const dates = {dates_js};
    const ratings = {ratings_js};

    const trace = {{
      x: dates, y: ratings,
      mode: 'lines+markers',
      type: 'scatter',
      marker: {{ size: 8, color: '#0074D9' }},
      line: {{ shape: 'spline', smoothing: 0.5, color: '#0074D9' }},
      hovertemplate: '%{{x}}<br>Rating: %{{y}}<extra></extra>'
    }};

    const traceBest = {{
      x: {best_dates_js}, y: {best_ratings_js},
      mode: 'markers+text',
      type: 'scatter',
      marker: {{ size: 12, color: '#FF4136' }},
      text: {best_ratings_js},
      textposition: 'bottom center',
      hovertemplate: 'Best: %{{y}} on %{{x}}<extra></extra>'
    }};

    const layout = {{
      margin: {{ l: 60, r: 40, t: 60, b: 60 }},
      xaxis: {{ type: 'date', tickformat: '%Y-%m-%d', tickangle: -45, dtick: 'M6' }},
      yaxis: {{ title: 'Rating (singles)', autorange: true }},
      plot_bgcolor: '#fafafa',
      paper_bgcolor: '#ffffff',
      hovermode: 'closest',
      showlegend: false
    }};

    Plotly.newPlot('chart', [trace, traceBest], layout, {{ responsive: true }});
  </script>
</body>
</html>
"#
    ))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON literal that cannot close the surrounding script element
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
