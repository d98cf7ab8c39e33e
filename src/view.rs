//! HTML rendering of the ledger page

use minijinja::{context, Environment};

use crate::{state::Ledger, utils::format_duration};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Renders the single-page view with an embedded template
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_function("format_duration", format_duration);
        Ok(Self { env })
    }

    /// Render the ledger with its computed total
    pub fn render_index(
        &self,
        timer_name: &str,
        ledger: &Ledger,
        total_seconds: u64,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template("index.html")?;
        template.render(context! {
            timer_name => timer_name,
            entries => &ledger.entries,
            active => &ledger.active,
            total_seconds => total_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActiveTimer, TimerEntry};

    #[test]
    fn renders_entries_and_total() {
        let renderer = PageRenderer::new().unwrap();
        let ledger = Ledger {
            entries: vec![TimerEntry {
                id: 1,
                timestamp: "2024-03-09 14:05:07".to_string(),
                duration: 3_725,
                description: "planning".to_string(),
            }],
            active: None,
        };

        let html = renderer.render_index("reading", &ledger, 3_725).unwrap();
        assert!(html.contains("reading"));
        assert!(html.contains("planning"));
        assert!(html.contains("01:02:05"));
    }

    #[test]
    fn shows_paused_state() {
        let renderer = PageRenderer::new().unwrap();
        let ledger = Ledger {
            entries: Vec::new(),
            active: Some(ActiveTimer {
                start_time: 0.0,
                accumulated: 12.0,
                paused: true,
            }),
        };

        let html = renderer.render_index("something", &ledger, 12).unwrap();
        assert!(html.contains("Paused"));
        assert!(html.contains("00:00:12"));
    }
}
