use std::str::FromStr;

/// Language the assistant speaks. Selects trigger phrases, canned replies and
/// the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Thai,
    English,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "th" | "thai" => Ok(Locale::Thai),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("unsupported locale '{}', expected 'th' or 'en'", other)),
        }
    }
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Thai => "th",
            Locale::English => "en",
        }
    }

    pub fn music_trigger(self) -> &'static str {
        match self {
            Locale::Thai => "เปิดเพลง",
            Locale::English => "play music",
        }
    }

    pub fn movie_trigger(self) -> &'static str {
        match self {
            Locale::Thai => "ดูหนัง",
            Locale::English => "watch movie",
        }
    }

    pub fn default_music_query(self) -> &'static str {
        match self {
            Locale::Thai => "เพลงผ่อนคลาย",
            Locale::English => "relaxing music",
        }
    }

    pub fn default_movie_query(self) -> &'static str {
        match self {
            Locale::Thai => "หนังแนะนำ",
            Locale::English => "recommended movie",
        }
    }

    pub fn now_playing_music(self, title: &str) -> String {
        match self {
            Locale::Thai => format!("กำลังเปิดเพลง: **{}** 🎶", title),
            Locale::English => format!("Now playing: **{}** 🎶", title),
        }
    }

    pub fn now_playing_movie(self, title: &str) -> String {
        match self {
            Locale::Thai => format!("กำลังเปิดหนัง: **{}** 🎬", title),
            Locale::English => format!("Now showing: **{}** 🎬", title),
        }
    }

    pub fn music_not_found(self) -> &'static str {
        match self {
            Locale::Thai => "ขอโทษค่ะ ไม่พบวิดีโอที่ตรงกับคำค้นหานะคะ 😢",
            Locale::English => "Sorry, I couldn't find a video matching your search 😢",
        }
    }

    pub fn movie_not_found(self) -> &'static str {
        match self {
            Locale::Thai => "ขอโทษค่ะ ไม่พบหนังที่ตรงกับคำค้นหานะคะ 🎥",
            Locale::English => "Sorry, I couldn't find a movie matching your search 🎥",
        }
    }

    pub fn no_prompt(self) -> &'static str {
        match self {
            Locale::Thai => "❌ ไม่มีข้อความ prompt",
            Locale::English => "❌ No prompt text",
        }
    }

    pub fn error_marker(self) -> &'static str {
        match self {
            Locale::Thai => "⛔️ เกิดข้อผิดพลาด: ",
            Locale::English => "⛔️ An error occurred: ",
        }
    }

    pub fn default_persona(self) -> &'static str {
        match self {
            Locale::Thai => "เป็นเพื่อนที่น่ารักและเป็นมิตร",
            Locale::English => "a sweet and friendly companion",
        }
    }

    /// Renders the system message for the given persona.
    pub fn system_prompt(self, persona: &str) -> String {
        match self {
            Locale::Thai => format!(
                r#"
คุณคือ 'คู่ใจ' ผู้ช่วย AI ที่มีบุคลิก: "{persona}"
กติกา:
1. ตอบเป็นภาษาไทยเสมอ ใช้คำพูดน่ารัก อ่อนโยน และเข้าใจง่าย ใส่อีโมจิให้เหมาะสม
2. ถ้าคำถามเกี่ยวกับ "สุขภาพจิต" ให้ตอบโดยอ้างอิงจาก กรมสุขภาพจิต เท่านั้น และลงท้ายด้วย:
   <div class='reference'>อ้างอิง: กรมสุขภาพจิต (คำแนะนำเบื้องต้น)</div>
3. ถ้าคำถามเกี่ยวกับ "สุขภาพร่างกาย" ให้ตอบโดยอ้างอิงจาก คณะแพทยศาสตร์ศิริราชพยาบาล หรือ จุฬาลงกรณ์มหาวิทยาลัย และลงท้ายด้วย:
   <div class='reference'>อ้างอิง: คณะแพทยศาสตร์ศิริราชพยาบาล, จุฬาฯ (คำแนะนำเบื้องต้น)</div>
4. สำหรับคำถามอื่นๆ ให้ตอบอย่างถูกต้อง พร้อมอ้างอิงแหล่งที่เชื่อถือได้
5. ห้ามให้คำแนะนำที่เป็นอันตราย หรือขัดต่อกฎหมายไทย
"#
            ),
            Locale::English => format!(
                r#"
You are 'Khu Jai', an AI companion with the personality: "{persona}"
Rules:
1. Always answer in English, in a warm, gentle and easy-to-understand way, with fitting emoji.
2. If the question is about "mental health", answer using only guidance from the Department of Mental Health, and end with:
   <div class='reference'>Reference: Department of Mental Health (basic guidance)</div>
3. If the question is about "physical health", answer using guidance from the Faculty of Medicine Siriraj Hospital or Chulalongkorn University, and end with:
   <div class='reference'>Reference: Faculty of Medicine Siriraj Hospital, Chulalongkorn University (basic guidance)</div>
4. For any other question, answer correctly and cite credible sources.
5. Never give advice that is dangerous or against the law.
"#
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_codes() {
        assert_eq!("th".parse::<Locale>().unwrap(), Locale::Thai);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::English);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn system_prompt_quotes_persona() {
        let prompt = Locale::Thai.system_prompt("ครูใจดี");
        assert!(prompt.contains("\"ครูใจดี\""));
        assert!(prompt.contains("กรมสุขภาพจิต"));
        assert!(prompt.contains("<div class='reference'>"));
    }
}
