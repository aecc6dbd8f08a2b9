//! Prompt builders (Indonesian)

use crate::state::{FieldId, IdeaContext, IdeaKind, LessonForm};

fn context_line(ctx: &IdeaContext) -> String {
    format!(
        "Jenjang {}, {}, Mata Pelajaran {}, Materi {}.",
        ctx.stage.label(),
        ctx.grade,
        ctx.subject,
        ctx.topic
    )
}

fn idea_instruction(kind: IdeaKind, ctx: &IdeaContext, context: &str) -> String {
    match kind {
        IdeaKind::Readiness => format!(
            "Analisis kesiapan belajar siswa secara mendalam untuk {context}\n\
             1. Identifikasi pengetahuan prasyarat yang wajib dikuasai.\n\
             2. Pertimbangkan tahap perkembangan kognitif sesuai usia siswa.\n\
             3. Sebutkan miskonsepsi atau hambatan belajar yang sering muncul pada topik ini.\n\
             4. Sarankan aktivitas pemantik singkat untuk mengecek kesiapan mereka."
        ),
        IdeaKind::Characteristics => format!(
            "Bedah karakteristik materi {} pada {}.\n\
             1. Tentukan apakah materi dominan Faktual, Konseptual, Prosedural, atau Metakognitif.\n\
             2. Jelaskan tingkat abstraksinya (perlu alat peraga konkret atau bisa langsung simbolik).\n\
             3. Hubungkan dengan konteks kehidupan nyata yang relevan bagi siswa {}.\n\
             4. Identifikasi \"Big Idea\" yang harus menetap di memori jangka panjang siswa.",
            ctx.topic,
            ctx.subject,
            ctx.stage.label()
        ),
        IdeaKind::Partnerships => format!(
            "Berikan ide kemitraan pembelajaran yang relevan dengan {} materi {}. \
             Contoh: kolaborasi orang tua, pakar tamu, komunitas lokal, atau dunia industri (DUDI) untuk SMK.",
            ctx.subject, ctx.topic
        ),
        IdeaKind::Environment => format!(
            "Rekomendasikan pengaturan lingkungan belajar (fisik/virtual) yang mendukung eksplorasi materi {}. \
             Misal: setting laboratorium, outdoor learning, atau pojok baca spesifik.",
            ctx.topic
        ),
        IdeaKind::Digital => format!(
            "Sebutkan tools digital spesifik yang meningkatkan pemahaman {}. \
             Jangan hanya menyebut 'internet'; sebutkan platform seperti PhET Simulation, GeoGebra, \
             Quizizz, atau AI tools yang relevan dengan materi {}.",
            ctx.subject, ctx.topic
        ),
    }
}

pub fn idea(kind: IdeaKind, ctx: &IdeaContext) -> String {
    let context = context_line(ctx);
    let instruction = idea_instruction(kind, ctx, &context);
    format!(
        "Bertindaklah sebagai Pakar Kurikulum dan Psikolog Pendidikan.\n\
         Berikan ide profesional dan terstruktur (dalam 1-2 paragraf) tentang \"{}\" untuk konteks berikut:\n\
         {context}\n\n\
         Instruksi Khusus: {instruction}\n\n\
         Gunakan Bahasa Indonesia yang teknis-pedagogis namun tetap inspiratif. \
         Hindari kata-kata klise dan berikan wawasan yang konkret.",
        kind.key()
    )
}

pub fn extraction(raw_text: &str) -> String {
    format!(
        "Ekstrak bagian \"Capaian Pembelajaran\" (CP) dan \"Tujuan Pembelajaran\" (TP) dari teks berikut.\n\
         Jika tidak ditemukan secara eksplisit, simpulkan berdasarkan isi teks tersebut.\n\
         Teks: {raw_text}"
    )
}

/// Prompt for the full document; `major` is the already-resolved major text
pub fn document(form: &LessonForm, major: Option<&str>) -> String {
    let text = |field: FieldId| form.text(field);
    let pedagogies = form.pedagogy_labels().join(", ");
    let dimensions = form.dimension_labels().join(", ");
    let major_line = major
        .map(|m| format!("Jurusan: {m}\n"))
        .unwrap_or_default();

    format!(
        "Bertindaklah sebagai asisten ahli kurikulum sekolah di Indonesia (Kurikulum Merdeka).\n\
         Tugas Anda adalah membuat Perencanaan Pembelajaran Mendalam (RPM) / Modul Ajar lengkap berdasarkan data berikut:\n\n\
         Satuan Pendidikan: {school}\n\
         Jenjang/Kelas: {stage} / {grade}\n\
         {major_line}\
         Mata Pelajaran: {subject}\n\
         Materi: {topic}\n\
         Kesiapan Peserta Didik: {readiness}\n\
         Karakteristik Materi: {characteristics}\n\
         Kemitraan Pembelajaran: {partnerships}\n\
         Lingkungan Pembelajaran: {environment}\n\
         Pemanfaatan Digital: {digital}\n\
         Capaian Pembelajaran: {cp}\n\
         Tujuan Pembelajaran: {tp}\n\
         Model Pembelajaran: {delivery}\n\
         Target Peserta Didik: {target}\n\
         Jumlah Pertemuan: {meetings}\n\
         Durasi: {duration}\n\
         Praktik Pedagogis: {pedagogies}\n\
         Dimensi Lulusan: {dimensions}\n\n\
         Persyaratan Tambahan:\n\
         1. Sarana & Prasarana: alat, bahan, dan fasilitas spesifik berdasarkan Lingkungan Pembelajaran.\n\
         2. Pertanyaan Pemantik: 2-3 pertanyaan pemicu rasa ingin tahu yang menantang (High Order Thinking).\n\
         3. Persiapan Pembelajaran: langkah teknis guru secara detail.\n\
         4. Pengalaman Belajar: detail per pertemuan (tepat {meetings} pertemuan) sesuai sintaks pedagogi ({pedagogies}).\n\
         5. Remedial & Pengayaan: strategi spesifik sesuai analisis kesiapan siswa.\n\
         6. Glosarium & Daftar Pustaka: relevan dan mutakhir.\n\n\
         PENTING: Manfaatkan data Kesiapan Peserta Didik dan Karakteristik Materi untuk menyusun strategi diferensiasi.\n\
         Gunakan Bahasa Indonesia yang baku dan profesional dengan format output JSON yang ketat.",
        school = text(FieldId::SchoolName),
        stage = form.stage().label(),
        grade = form.grade(),
        subject = text(FieldId::Subject),
        topic = text(FieldId::Topic),
        readiness = text(FieldId::Readiness),
        characteristics = text(FieldId::MaterialCharacteristics),
        partnerships = text(FieldId::Partnerships),
        environment = text(FieldId::Environment),
        digital = text(FieldId::DigitalTools),
        cp = text(FieldId::Outcome),
        tp = text(FieldId::Objective),
        delivery = form.delivery_mode().label(),
        target = form.target_students().label(),
        meetings = form.meeting_count(),
        duration = text(FieldId::Duration),
    )
}
