//! Patterns flow - Print the context flow pattern catalog
//!
//! The catalog is fixed text: no inputs, no timestamps, no color codes.
//! Rendering is split from printing so tests can assert byte stability.

use anyhow::Result;

/// One conceptual context flow pattern
struct Pattern {
    title: &'static str,
    diagram: &'static [&'static str],
    traits: &'static str,
}

/// The catalog, in presentation order
const PATTERNS: &[Pattern] = &[
    Pattern {
        title: "1️⃣ Sequential Flow (File-Based)",
        diagram: &["Agent A → [writes file] → File ID → Agent B"],
        traits: "✓ Reliable  ✓ Simple  ⚠️ Some latency",
    },
    Pattern {
        title: "2️⃣ Parallel Execution",
        diagram: &[
            "Agent A ┐",
            "Agent B ├→ [shared resource]",
            "Agent C ┘",
        ],
        traits: "⚠️ Race conditions  ✓ Fast  ✓ Scalable",
    },
    Pattern {
        title: "3️⃣ Context Injection",
        diagram: &["Main → [with context] → Agent"],
        traits: "✓ Fast  ✓ No files  ✓ Reliable",
    },
    Pattern {
        title: "4️⃣ Agent Spawning",
        diagram: &["Agent A → [spawns] → Agent B"],
        traits: "❓ Experimental  ❓ May not work",
    },
];

const RECOMMENDATION: &str = "💡 Recommendation: Start with Sequential Flow!";

/// Render the full pattern catalog
pub fn render_patterns() -> String {
    let mut out = String::new();

    out.push_str("📊 Context Flow Patterns\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');

    for pattern in PATTERNS {
        out.push('\n');
        out.push_str(pattern.title);
        out.push('\n');
        for line in pattern.diagram {
            out.push_str("   ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("   ");
        out.push_str(pattern.traits);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(RECOMMENDATION);
    out.push('\n');

    out
}

/// Run the patterns flow
pub fn run_patterns() -> Result<()> {
    print!("{}", render_patterns());
    Ok(())
}
