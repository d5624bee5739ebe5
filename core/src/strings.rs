//! Fixed user-facing texts.
//!
//! The hosting page is Arabic, right-to-left; every string a user can see
//! lives here so both front ends stay in step.

/// Appended, in order, the first time the chat surface is opened.
pub const WELCOME_MESSAGES: [&str; 2] = [
    "السلام عليكم! 👋 أنا مساعدك الذكي في ANDO.5",
    "يمكنني مساعدتك في اختيار لغة البرمجة المناسبة والإجابة على استفساراتك! 💻",
];

/// Transcript entry for a reachable API that reported a non-success status.
pub const PROCESSING_FAILED: &str = "عذراً، حدث خطأ في المعالجة 😞";

/// Transcript entry for a request that never produced a usable response.
pub const CONNECTION_FAILED: &str = "عذراً، لا يمكنني الاتصال بالخادم الآن. حاول لاحقاً 🔌";

pub const INFO_USES: &str = "📌 الاستخدامات: ";
pub const INFO_DIFFICULTY: &str = "📊 الصعوبة: ";
pub const INFO_POPULARITY: &str = "⭐ الشهرة: ";
pub const INFO_RESOURCES: &str = "📚 الموارد:";

pub const CHAT_TITLE: &str = "🤖 مساعد ANDO.5 الذكي";
pub const CHAT_OPEN_TITLE: &str = "فتح المساعد الذكي";
pub const CHAT_CLOSE_TITLE: &str = "إغلاق";
pub const CHAT_SEND_TITLE: &str = "إرسال";
pub const CHAT_PLACEHOLDER: &str = "اكتب سؤالك...";
pub const CHAT_INPUT_LABEL: &str = "حقل الإدخال للمحادثة";

pub const NAME_LABEL: &str = "الاسم";
pub const NAME_PLACEHOLDER: &str = "اكتب اسمك";

pub const SUBMIT_IDLE: &str = "إرسال";
pub const SUBMIT_WORKING: &str = "جاري الإرسال...";

pub const NAME_INVALID_CHARACTERS: &str = "الاسم يحتوي على أحرف غير مسموحة";
pub const NAME_TOO_SHORT: &str = "الاسم يجب أن يكون أكثر من حرف واحد";
pub const NAME_TOO_LONG: &str = "الاسم طويل جداً (أقصى 50 حرف)";

/// Success notification shown after the simulated submission.
#[must_use]
pub fn submit_success(name: &str) -> String {
    format!("تم تسجيل البيانات بنجاح(محاكاة) اهلا بك يا {name}")
}
