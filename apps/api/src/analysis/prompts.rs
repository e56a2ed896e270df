// All model prompt templates for the analysis module.
// Field names and enumerated values here are the contract with the model;
// the normalizer reads exactly these keys.

/// Single-note prompt. Replace: {polarity_label}, {note_text}
pub const NOTE_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following {polarity_label} note that a manager recorded about an employee.

NOTE:
"{note_text}"

Respond with ONLY a JSON object with this EXACT schema (no extra fields):
{
  "category": "work_discipline" | "corporate_culture" | "basic_rules" | "performance" | "safety_hygiene",
  "risk_level": "critical" | "high" | "medium" | "low",
  "competency_scores": {
    "communication": {"score": 3, "confidence": 0.7, "reasoning": "string"},
    "teamwork": {"score": 3, "confidence": 0.7, "reasoning": "string"},
    "problem_solving": {"score": 3, "confidence": 0.7, "reasoning": "string"},
    "customer_focus": {"score": 3, "confidence": 0.7, "reasoning": "string"},
    "reliability": {"score": 3, "confidence": 0.7, "reasoning": "string"}
  },
  "hr_recommendations": {
    "immediate": ["string"],
    "short_term": ["string"],
    "long_term": ["string"]
  },
  "key_insights": ["string"],
  "sentiment": "positive" | "negative"
}

RULES:
1. "score" is an integer from 1 (very poor) to 5 (excellent)
2. "confidence" is a number from 0.0 to 1.0 describing how strongly the note supports the score
3. If the note says nothing about a competency, score it 3 with confidence below 0.3
4. Write every free-text value in Turkish
5. Respond with ONLY the JSON object, nothing else"#;

/// Behavioral categories rubric embedded in the comprehensive prompt.
pub const BEHAVIORAL_CATEGORIES_RUBRIC: &str = "\
- work_discipline: punctuality, attendance, shift handovers, break discipline
- corporate_culture: respect toward colleagues and guests, communication tone, teamwork
- basic_rules: uniform and dress code, phone usage, company procedures
- performance: task quality, speed, sales and service results
- safety_hygiene: food safety, cleanliness, occupational safety";

/// Risk level definitions embedded in the comprehensive prompt.
pub const RISK_LEVELS_RUBRIC: &str = "\
- critical: safety or hygiene violation, or a negative pattern repeated three or more times; immediate intervention required
- high: a repeated negative pattern or a serious single incident; action within one week
- medium: isolated negative notes balanced by positive ones; coaching and monitoring
- low: predominantly positive history; routine follow-up";

/// Weighting instruction embedded in the comprehensive prompt.
pub const WEIGHTING_INSTRUCTION: &str = "\
CRITICAL: Weight REPEATED negative patterns more heavily than isolated incidents. \
Any safety or hygiene violation MUST be assessed as critical, regardless of positive notes.";

/// Comprehensive prompt.
/// Replace: {full_name}, {position}, {positive_count}, {positive_notes},
///          {negative_count}, {negative_notes}, {performance_scores},
///          {categories_rubric}, {risk_rubric}, {weighting_instruction}
pub const COMPREHENSIVE_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Prepare a comprehensive HR analysis report for the following employee.

EMPLOYEE: {full_name}
POSITION: {position}

POSITIVE NOTES ({positive_count}):
{positive_notes}

NEGATIVE NOTES ({negative_count}):
{negative_notes}

TASK PERFORMANCE SCORES:
{performance_scores}

BEHAVIORAL CATEGORIES:
{categories_rubric}

RISK LEVELS:
{risk_rubric}

{weighting_instruction}

Respond with ONLY a JSON object with this EXACT schema (no extra fields):
{
  "behavioral_category_analysis": {
    "work_discipline": {
      "positive_count": 0,
      "negative_count": 2,
      "themes": ["string"],
      "evidence": ["string"],
      "risk_assessment": "critical" | "high" | "medium" | "low"
    },
    "corporate_culture": {"positive_count": 0, "negative_count": 0, "themes": [], "evidence": [], "risk_assessment": "low"},
    "basic_rules": {"positive_count": 0, "negative_count": 0, "themes": [], "evidence": [], "risk_assessment": "low"},
    "performance": {"positive_count": 0, "negative_count": 0, "themes": [], "evidence": [], "risk_assessment": "low"},
    "safety_hygiene": {"positive_count": 0, "negative_count": 0, "themes": [], "evidence": [], "risk_assessment": "low"}
  },
  "executive_summary": {
    "overall_risk_level": "critical" | "high" | "medium" | "low",
    "primary_concerns": ["string"],
    "key_strengths": ["string"],
    "immediate_action_required": true
  },
  "hr_recommendations": {
    "priority_1_critical": [
      {
        "action": "string",
        "timeline": "acil" | "1_hafta" | "2_hafta",
        "justification": "string",
        "evidence": ["string"]
      }
    ],
    "priority_2_coaching": [
      {"area": "string", "method": "string", "duration": "string", "success_metric": "string"}
    ],
    "priority_3_monitoring": {
      "daily_checks": ["string"],
      "weekly_reviews": ["string"],
      "monthly_evaluation": ["string"],
      "escalation_triggers": ["string"]
    }
  },
  "competency_assessment": {
    "communication": {"score": 3, "confidence": 0.7, "reasoning": "string", "development_need": "high" | "medium" | "low"},
    "teamwork": {"score": 3, "confidence": 0.7, "reasoning": "string", "development_need": "medium"},
    "problem_solving": {"score": 3, "confidence": 0.7, "reasoning": "string", "development_need": "medium"},
    "customer_focus": {"score": 3, "confidence": 0.7, "reasoning": "string", "development_need": "medium"},
    "reliability": {"score": 3, "confidence": 0.7, "reasoning": "string", "development_need": "medium"}
  },
  "business_impact_analysis": {
    "current_performance_impact": "string",
    "team_morale_risk": "string",
    "reputation_risk": "string",
    "cost_implications": "string"
  },
  "action_timeline": {
    "immediate": ["string"],
    "this_week": ["string"],
    "this_month": ["string"],
    "next_quarter": ["string"]
  }
}

RULES:
1. Every evidence item MUST quote or paraphrase a specific note above; do NOT invent incidents
2. "score" is an integer from 1 (very poor) to 5 (excellent); "confidence" is 0.0 to 1.0
3. Use "acil" as the timeline only when the action cannot wait a single day
4. Write every free-text value in Turkish
5. Respond with ONLY the JSON object, nothing else"#;
