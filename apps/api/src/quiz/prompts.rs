// Prompt and schema for the school analysis call.
// The product is Korean-only, so the prompt and fallback copy are Korean.

use serde_json::{json, Value};

/// Analysis prompt template.
/// Replace: {school_name}, {short_name}, {traits}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"사용자가 아트 스쿨 성향 테스트를 완료했습니다.
매칭된 학교: {school_name} ({short_name}).
사용자의 주요 성향: {traits}.

이 학교가 사용자에게 왜 잘 맞는지 재미있는 MZ세대 스타일로 분석해주세요.
반드시 **한국어(Korean)**로 작성해야 합니다.

다음 속성을 포함한 JSON 객체만 반환하세요:
- persona: 사용자를 위한 창의적인 2~3단어 별명 (예: "디지털 다빈치", "패션 반항아").
- whyMatch: 사용자의 성향과 이 학교가 왜 찰떡궁합인지 설명하는 2문장.
- advice: 이 학교 입시나 포트폴리오 준비를 위한 구체적이고 실질적인 꿀팁 1개."#;

/// Fallback persona shown when the AI call fails.
pub const FALLBACK_PERSONA: &str = "창의적인 비전가";

/// Fallback rationale. Replace: {trait}, {short_name}
pub const FALLBACK_WHY_MATCH_TEMPLATE: &str =
    "당신의 {trait} 성향이 {short_name}의 교육 철학과 완벽하게 일치합니다. 당신이 있어야 할 곳은 바로 여기입니다!";

/// Interpolated into the fallback rationale when there is no trait to name.
pub const FALLBACK_TRAIT_WORD: &str = "창의적인";

pub const FALLBACK_ADVICE: &str =
    "포트폴리오에서 당신만의 독특한 작업 과정을 보여주는 데 집중하세요.";

/// Output schema for the analysis call, in the Gemini `responseSchema` dialect.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "persona": { "type": "STRING" },
            "whyMatch": { "type": "STRING" },
            "advice": { "type": "STRING" }
        },
        "required": ["persona", "whyMatch", "advice"],
        "propertyOrdering": ["persona", "whyMatch", "advice"]
    })
}
