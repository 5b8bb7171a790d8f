//! Static question bank: one fixed question per (stage, job role).

use crate::interview::stage::{JobRole, Stage};

/// Returns the question asked for `role` during `stage`.
pub fn question_for(stage: Stage, role: JobRole) -> &'static str {
    match (stage, role) {
        (Stage::Hr, JobRole::DataScientist) => {
            "Mengapa Anda tertarik melamar posisi Data Scientist di perusahaan ini?"
        }
        (Stage::Hr, JobRole::SoftwareEngineer) => {
            "Apa yang membuat Anda tertarik pada peran Software Engineer di tim kami?"
        }
        (Stage::Hr, JobRole::ItSupport) => {
            "Bagaimana Anda melihat peran IT Support dalam mendukung operasional perusahaan?"
        }
        (Stage::Hr, JobRole::UiUxDesigner) => {
            "Apa motivasi Anda untuk berkarir sebagai UI/UX Designer dan mengapa di sini?"
        }
        (Stage::Behavioral, JobRole::DataScientist) => {
            "Ceritakan pengalaman Anda menangani dataset besar dan bagaimana Anda mengatasinya (gunakan STAR)."
        }
        (Stage::Behavioral, JobRole::SoftwareEngineer) => {
            "Deskripsikan konflik tim yang Anda selesaikan (gunakan STAR)."
        }
        (Stage::Behavioral, JobRole::ItSupport) => {
            "Ceritakan saat Anda menangani masalah teknis mendadak (gunakan STAR)."
        }
        (Stage::Behavioral, JobRole::UiUxDesigner) => {
            "Bagaimana Anda menangani feedback negatif dari user testing (gunakan STAR)?"
        }
        (Stage::Technical, JobRole::DataScientist) => {
            "Jelaskan bagaimana Anda membangun model machine learning untuk prediksi penjualan."
        }
        (Stage::Technical, JobRole::SoftwareEngineer) => {
            "Bagaimana Anda mengoptimasi kode Python untuk performa tinggi?"
        }
        (Stage::Technical, JobRole::ItSupport) => {
            "Jelaskan langkah troubleshooting untuk jaringan yang down."
        }
        (Stage::Technical, JobRole::UiUxDesigner) => {
            "Bagaimana Anda menggunakan tools seperti Figma untuk prototyping responsif?"
        }
    }
}
