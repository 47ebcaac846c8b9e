//! Site palette and global stylesheet.

use wdf_content::models::Tone;

pub const OCEAN_DEEP: &str = "#0c4a6e";
pub const OCEAN_MEDIUM: &str = "#0369a1";
pub const OCEAN_LIGHT: &str = "#0ea5e9";
pub const AQUA_BRIGHT: &str = "#22d3ee";
pub const WATER_FRESH: &str = "#059669";
pub const SECONDARY_LIGHT: &str = "#34d399";
pub const SKY_LIGHT: &str = "#f0f9ff";
pub const BORDER: &str = "#e2e8f0";
pub const ALERT_ORANGE: &str = "#ea580c";
pub const ALERT_RED: &str = "#dc2626";

/// Text and background color for a tone, as used by badges and stat tiles.
pub fn tone_colors(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Positive => ("#166534", "#dcfce7"),
        Tone::Info => ("#1e40af", "#dbeafe"),
        Tone::Warning => ("#854d0e", "#fef9c3"),
        Tone::Critical => ("#991b1b", "#fee2e2"),
        Tone::Neutral => ("#1f2937", "#f3f4f6"),
    }
}

/// Solid color for status dots and big stat numbers.
pub fn tone_accent(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "#22c55e",
        Tone::Info => "#2563eb",
        Tone::Warning => "#f59e0b",
        Tone::Critical => "#ef4444",
        Tone::Neutral => "#6b7280",
    }
}

/// Diagonal gradient between two palette colors.
pub fn gradient(from: &str, to: &str) -> String {
    format!("linear-gradient(135deg, {}, {})", from, to)
}

pub const GLOBAL_CSS: &str = r#"
* { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 0;
  color: #0f172a;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.5;
}
a { color: inherit; text-decoration: none; }
h1, h2, h3, h4 { margin: 0; }
ul { margin: 0; padding: 0; list-style: none; }

.wdf-card {
  background: white;
  border: 1px solid #e2e8f0;
  border-radius: 12px;
  box-shadow: 0 4px 12px rgba(12, 74, 110, 0.08);
  overflow: hidden;
  transition: transform 300ms ease, box-shadow 300ms ease;
}
.wdf-card.hoverable:hover {
  transform: translateY(-4px);
  box-shadow: 0 12px 32px rgba(12, 74, 110, 0.18);
}

.wdf-button {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  padding: 10px 20px;
  border-radius: 8px;
  border: 1px solid #e2e8f0;
  background: white;
  color: #0f172a;
  font-size: 15px;
  font-weight: 500;
  cursor: pointer;
  transition: background 150ms ease, color 150ms ease;
}
.wdf-button:hover { background: #f0f9ff; }
.wdf-button.active {
  background: linear-gradient(135deg, #0c4a6e, #0369a1);
  border-color: #0c4a6e;
  color: white;
}
.wdf-button.aqua {
  background: linear-gradient(135deg, #0ea5e9, #22d3ee);
  border: none;
  color: white;
}
.wdf-button.ghost {
  background: rgba(255, 255, 255, 0.1);
  border-color: rgba(255, 255, 255, 0.3);
  color: white;
}
.wdf-button.large { padding: 14px 32px; font-size: 18px; }

.wdf-nav-link {
  padding: 8px 12px;
  border-radius: 6px;
  color: #334155;
  font-size: 14px;
  font-weight: 500;
}
.wdf-nav-link:hover { background: #f0f9ff; color: #0c4a6e; }
.wdf-nav-link.active { background: #0c4a6e; color: white; }

.wdf-grid { display: grid; gap: 24px; }
.wdf-grid.cols-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
.wdf-grid.cols-3 { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
.wdf-grid.cols-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }

@keyframes wdf-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}
.wdf-float { animation: wdf-float 6s ease-in-out infinite; }

@keyframes wdf-bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, -12px); }
}
.wdf-bounce { animation: wdf-bounce 1.5s ease-in-out infinite; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors_differ() {
        let tones = [
            Tone::Positive,
            Tone::Info,
            Tone::Warning,
            Tone::Critical,
            Tone::Neutral,
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(tone_colors(*a), tone_colors(*b));
            }
        }
    }

    #[test]
    fn test_gradient() {
        assert_eq!(
            gradient(OCEAN_DEEP, AQUA_BRIGHT),
            "linear-gradient(135deg, #0c4a6e, #22d3ee)"
        );
    }
}
