//! The fixed game rules and response schema sent with every request.

use serde_json::{Value, json};

/// Opening message that asks the game master to set the first scene.
pub const OPENING_MESSAGE: &str =
    "Start the game. First class of 'Introduction to Algorithms'.";

/// Rules, tone and output format for the game master.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are the "Game Master" of a conversational text adventure called "Profesor.exe".
The player is a Computer Science (CS) professor at a technical university.

**Player goals:**
1. Keep student MOTIVATION high (0-100).
2. Keep their own AUTHORITY in class high (0-100).
3. Manage their own ENERGY (0-100).

**Rules:**
- Open the game with a typical situation (first day of class, students distracted by their phones, a broken projector, a hard question about pointers in C).
- The tone is "geek/academic", with programming references (bugs, compiling, stack overflow, coffee).
- Keep the narrative short (3 paragraphs at most).
- Always offer 3 varied actions (one sensible, one risky or funny, one strict).

**Response format:**
ALWAYS answer with valid JSON following this schema. Do NOT wrap it in markdown code fences (```json), send only the raw JSON.

JSON schema:
{
  "narrative": "string (what happens, simple Markdown allowed)",
  "stats": {
    "motivation": number (integer 0-100),
    "authority": number (integer 0-100),
    "energy": number (integer 0-100)
  },
  "choices": ["string", "string", "string"],
  "gameOver": boolean (true if authority or energy reaches 0),
  "victory": boolean (true if the semester or a major milestone is survived with high motivation),
  "reason": "string (optional, why the game ended)"
}

Recommended starting values: Motivation: 50, Authority: 80, Energy: 100.
Adjust the stats dynamically based on the player's actions.
"#;

/// Structured-output schema in the Gemini `responseSchema` dialect.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "narrative": { "type": "STRING" },
            "stats": {
                "type": "OBJECT",
                "properties": {
                    "motivation": { "type": "INTEGER" },
                    "authority": { "type": "INTEGER" },
                    "energy": { "type": "INTEGER" }
                },
                "required": ["motivation", "authority", "energy"]
            },
            "choices": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "gameOver": { "type": "BOOLEAN" },
            "victory": { "type": "BOOLEAN" },
            "reason": { "type": "STRING" }
        },
        "required": ["narrative", "stats", "choices", "gameOver", "victory"]
    })
}
