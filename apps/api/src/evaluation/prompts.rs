// Evaluation prompt templates, one per interview stage.
// Replace {job_role}, {question} and {answer} before sending.

use crate::interview::stage::Stage;

pub const HR_TEMPLATE: &str = r#"Anda adalah pewawancara HR. Evaluasi jawaban untuk posisi '{job_role}'.
Pertanyaan: "{question}"
Jawaban: "{answer}"
Nilai berdasarkan motivasi, cultural fit, dan komunikasi (skor 1-5).
Deteksi elemen STAR dasar.
Output HARUS JSON valid: {"score": <int 1-5>, "feedback": "<feedback konstruktif>", "star_elements_detected": {"situation": <bool>, "task": <bool>, "action": <bool>, "result": <bool>}}"#;

pub const BEHAVIORAL_TEMPLATE: &str = r#"Anda adalah pewawancara behavioral. Evaluasi menggunakan metode STAR lengkap untuk '{job_role}'.
Pertanyaan: "{question}"
Jawaban: "{answer}"
Skor 1-5 berdasarkan kelengkapan STAR dan soft skills (teamwork, problem-solving).
Output HARUS JSON valid: {"score": <int 1-5>, "feedback": "<feedback spesifik>", "star_elements_detected": {"situation": <bool>, "task": <bool>, "action": <bool>, "result": <bool>}}"#;

pub const TECHNICAL_TEMPLATE: &str = r#"Anda adalah pewawancara teknis. Evaluasi akurasi dan relevansi untuk '{job_role}'.
Pertanyaan: "{question}"
Jawaban: "{answer}"
Skor 1-5 berdasarkan pemahaman konsep teknis. Deteksi STAR jika relevan.
Output HARUS JSON valid: {"score": <int 1-5>, "feedback": "<feedback teknis>", "star_elements_detected": {"situation": <bool>, "task": <bool>, "action": <bool>, "result": <bool>}}"#;

pub fn template_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Hr => HR_TEMPLATE,
        Stage::Behavioral => BEHAVIORAL_TEMPLATE,
        Stage::Technical => TECHNICAL_TEMPLATE,
    }
}

/// Fills the stage template in a single pass, so placeholder-looking text
/// inside a substituted value is copied through untouched.
pub fn build_prompt(stage: Stage, job_role: &str, question: &str, answer: &str) -> String {
    let values = [
        ("{job_role}", job_role),
        ("{question}", question),
        ("{answer}", answer),
    ];

    let template = template_for(stage);
    let mut prompt = String::with_capacity(template.len() + answer.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        prompt.push_str(&rest[..open]);
        rest = &rest[open..];
        match values.iter().find(|(token, _)| rest.starts_with(*token)) {
            Some((token, value)) => {
                prompt.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                prompt.push('{');
                rest = &rest[1..];
            }
        }
    }
    prompt.push_str(rest);
    prompt
}
