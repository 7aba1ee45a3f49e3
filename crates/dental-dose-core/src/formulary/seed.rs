//! Built-in drug reference table.

use crate::models::{BilingualText, DrugRecord};

fn drug(
    id: &str,
    generic_name: &str,
    brand_names: &[&str],
    category: (&str, &str),
    description: (&str, &str),
    dose: (&str, &str),
) -> DrugRecord {
    DrugRecord {
        id: id.into(),
        generic_name: generic_name.into(),
        brand_names: brand_names.iter().map(|b| b.to_string()).collect(),
        category: BilingualText::new(category.0, category.1),
        description: BilingualText::new(description.0, description.1),
        dose: Some(BilingualText::new(dose.0, dose.1)),
    }
}

const LOCAL_ANESTHETIC: (&str, &str) = ("Local Anesthetic", "مخدر موضعي");
const NSAID: (&str, &str) = ("Analgesic (NSAID)", "مسكنات (NSAID)");
const ANTIBIOTIC: (&str, &str) = ("Antibiotic", "مضاد حيوي");
const INJECTABLE_ANTIBIOTIC: (&str, &str) = ("Antibiotic (Injectable)", "مضاد حيوي (حقن)");
const NEUROLOGICAL: (&str, &str) = ("Neurological", "أدوية الأعصاب");
const ANTIEMETIC: (&str, &str) = ("Antiemetic", "مضاد للقيء");
const ANTIFUNGAL: (&str, &str) = ("Antifungal", "مضاد للفطريات");
const ANTISEPTIC: (&str, &str) = ("Antiseptic", "مطهر");
const EMERGENCY: (&str, &str) = ("Emergency", "طوارئ");

/// Default drug records, in display order.
pub fn builtin_records() -> Vec<DrugRecord> {
    vec![
        // Local anesthetics
        drug(
            "la1",
            "Lidocaine 2%",
            &["Xylocaine", "Lidocaine EIPICO", "Lidocaine Adwia"],
            LOCAL_ANESTHETIC,
            (
                "Most common. Duration 60-90 min. Contraindicated in amide allergy.",
                "الأكثر شيوعًا في مصر. فعال لمدة 60-90 دقيقة. ممنوع في حالات فرط الحساسية للأميدات.",
            ),
            ("Max 7mg/kg (w/ Epi)", "القصوى 7 مجم/كجم"),
        ),
        drug(
            "la2",
            "Articaine 4%",
            &["Ubistesin Forte", "Septanest", "Artinib"],
            LOCAL_ANESTHETIC,
            (
                "High bone penetration. Ideal for mandibular molars. Duration 45-60 min.",
                "أقوى انتشارًا في العظم. مثالي لخلع الضروس السفلية. مدة التأثير 45-60 دقيقة.",
            ),
            ("Max 7mg/kg", "القصوى 7 مجم/كجم"),
        ),
        drug(
            "la3",
            "Mepivacaine 3%",
            &["Scandonest", "Mepivacaine Adwia"],
            LOCAL_ANESTHETIC,
            (
                "No epinephrine (Safe for cardiac). Short duration (20-40 min).",
                "بدون إبينفرين (آمن لمرضى القلب). مدة قصيرة (20-40 دقيقة).",
            ),
            ("Max 6.6mg/kg", "القصوى 6.6 مجم/كجم"),
        ),
        drug(
            "la4",
            "Bupivacaine 0.5%",
            &["Marcaine", "Bupivacaine EIPICO"],
            LOCAL_ANESTHETIC,
            (
                "Long acting (4-8 hrs). For long surgeries/post-op pain. Slow onset.",
                "تخدير طويل المدى (4-8 ساعات). بطء البدء.",
            ),
            ("Max 2mg/kg", "القصوى 2 مجم/كجم"),
        ),
        drug(
            "la5",
            "Prilocaine 4%",
            &["Citanest"],
            LOCAL_ANESTHETIC,
            (
                "Alternative for cardiac patients. Risk of methemoglobinemia.",
                "بديل لمرضى القلب. خطر الميتهيموغلوبينيميا عند الأطفال.",
            ),
            ("Max 8mg/kg", "القصوى 8 مجم/كجم"),
        ),
        // Analgesics
        drug(
            "an1",
            "Ibuprofen",
            &["Brufen", "Adol", "Profen"],
            NSAID,
            (
                "First line for dental pain. Anti-inflammatory. Avoid in ulcers/asthma.",
                "الخيار الأول. مضاد للالتهاب. ممنوع مع القرحة والربو.",
            ),
            ("400-600mg q6-8h", "400-600 مجم كل 6-8 ساعات"),
        ),
        drug(
            "an2",
            "Diclofenac Potassium",
            &["Cataflam", "Catafast", "Dicloran"],
            NSAID,
            (
                "Rapid onset. Stomach/Kidney risk. Max 3 days.",
                "سريع المفعول. خطر على المعدة والكلى. لا تتجاوز 3 أيام.",
            ),
            ("50mg q8h", "50 مجم كل 8 ساعات"),
        ),
        drug(
            "an3",
            "Ketorolac",
            &["Toradol", "Ketolac"],
            NSAID,
            (
                "Strongest NSAID. Severe pain only. Max 5 days. High bleeding risk.",
                "أقوى مسكن. للآلام الشديدة. ممنوع > 5 أيام. خطر نزيف.",
            ),
            ("10mg q4-6h", "10 مجم كل 4-6 ساعات"),
        ),
        drug(
            "an4",
            "Paracetamol",
            &["Panadol", "Cetal", "Abimol"],
            ("Analgesic", "مسكنات"),
            (
                "Safe for children/pregnancy. Not anti-inflammatory.",
                "الآمن للأطفال والحوامل. لا مضاد للالتهاب.",
            ),
            ("500-1000mg q6h", "500-1000 مجم كل 6 ساعات"),
        ),
        drug(
            "an5",
            "Tramadol",
            &["Tramal", "Contramal"],
            ("Analgesic (Opioid)", "مسكن (أفيوني)"),
            (
                "For severe pain. Addictive potential. Prescription only.",
                "للآلام الشديدة. يسبب الإدمان. يحتاج وصفة.",
            ),
            ("50-100mg q6h", "50-100 مجم كل 6 ساعات"),
        ),
        drug(
            "an6",
            "Mefenamic Acid",
            &["Ponstan", "Mefacit"],
            NSAID,
            (
                "Anti-inflammatory. Good for pulpitis. May cause diarrhea.",
                "مضاد للالتهاب. جيد لالتهاب اللب. قد يسبب إسهال.",
            ),
            ("500mg q8h", "500 مجم كل 8 ساعات"),
        ),
        // Oral antibiotics
        drug(
            "ab1",
            "Amoxicillin",
            &["Amoxil", "Amoxytex"],
            ANTIBIOTIC,
            (
                "First line for abscesses. Contraindicated in Penicillin allergy.",
                "الخط الأول للخراجات. ممنوع في حساسية البنسلين.",
            ),
            ("500mg q8h", "500 مجم كل 8 ساعات"),
        ),
        drug(
            "ab2",
            "Amoxicillin/Clavulanate",
            &["Augmentin", "Curam", "Amoclan", "Clavimox"],
            ANTIBIOTIC,
            (
                "Strongest for resistant infections. Diarrhea risk.",
                "الأقوى للالتهابات المقاومة. خطر الإسهال.",
            ),
            ("625mg/1g q12h", "625 مجم أو 1 جرام كل 12 ساعة"),
        ),
        drug(
            "ab3",
            "Clindamycin",
            &["Dalacin C", "Clinzex"],
            ANTIBIOTIC,
            (
                "Alternative for Penicillin allergy. Anaerobes.",
                "بديل لحساسية البنسلين. للبكتيريا اللاهوائية.",
            ),
            ("300mg q6h", "300 مجم كل 6 ساعات"),
        ),
        drug(
            "ab4",
            "Azithromycin",
            &["Zithromax", "Azro"],
            ANTIBIOTIC,
            (
                "Penicillin allergy. Once daily. Good compliance.",
                "لحساسية البنسلين. جرعة واحدة يومياً.",
            ),
            ("500mg daily x3", "500 مجم يومياً لمدة 3 أيام"),
        ),
        drug(
            "ab5",
            "Metronidazole",
            &["Flagyl", "Amrizole"],
            ANTIBIOTIC,
            ("Anaerobes only. NO ALCOHOL.", "للاهوائيات فقط. ممنوع الكحول."),
            ("500mg q8h", "500 مجم كل 8 ساعات"),
        ),
        drug(
            "ab6",
            "Ciprofloxacin",
            &["Ciprobay"],
            ANTIBIOTIC,
            (
                "Severe gum infections. Avoid in children.",
                "لالتهابات اللثة الشديدة. لا يستخدم للأطفال.",
            ),
            ("500mg q12h", "500 مجم كل 12 ساعة"),
        ),
        drug(
            "ab7",
            "Doxycycline",
            &["Vibramycin"],
            ANTIBIOTIC,
            (
                "Gum infections. Avoid in pregnancy/children.",
                "لالتهابات اللثة. ممنوع للحوامل والأطفال.",
            ),
            ("100mg daily", "100 مجم يومياً"),
        ),
        // Injectable antibiotics
        drug(
            "ab8",
            "Ceftriaxone",
            &["Rocephin", "Ceftriaxone EIPICO"],
            INJECTABLE_ANTIBIOTIC,
            (
                "Third-generation cephalosporin. Severe spreading odontogenic infections.",
                "سيفالوسبورين من الجيل الثالث. للالتهابات السنية الشديدة المنتشرة.",
            ),
            ("1-2g IV/IM daily", "1-2 جرام وريد/عضل يومياً"),
        ),
        drug(
            "ab9",
            "Cefotaxime",
            &["Claforan"],
            INJECTABLE_ANTIBIOTIC,
            (
                "Third-generation cephalosporin. Hospital use.",
                "سيفالوسبورين من الجيل الثالث. للاستخدام في المستشفى.",
            ),
            ("1-2g IV q8h", "1-2 جرام وريد كل 8 ساعات"),
        ),
        drug(
            "ab10",
            "Ampicillin/Sulbactam",
            &["Unasyn"],
            INJECTABLE_ANTIBIOTIC,
            (
                "Broad anaerobic cover for fascial space infections.",
                "تغطية واسعة للاهوائيات في التهابات المسافات اللفافية.",
            ),
            ("1.5-3g IV q6h", "1.5-3 جرام وريد كل 6 ساعات"),
        ),
        drug(
            "ab11",
            "Cefepime",
            &["Maxipime"],
            INJECTABLE_ANTIBIOTIC,
            (
                "Fourth-generation cephalosporin. Reserved for resistant infections.",
                "سيفالوسبورين من الجيل الرابع. للالتهابات المقاومة فقط.",
            ),
            ("1-2g IV q12h", "1-2 جرام وريد كل 12 ساعة"),
        ),
        // Neurological agents
        drug(
            "neur1",
            "Gabapentin",
            &["Neurontin"],
            NEUROLOGICAL,
            (
                "Neuropathic orofacial pain. Adjunct in trigeminal neuralgia.",
                "لآلام الوجه العصبية. مساعد في علاج ألم العصب الخامس.",
            ),
            ("300mg TID", "300 مجم 3 مرات يومياً"),
        ),
        drug(
            "neur2",
            "Levetiracetam",
            &["Keppra"],
            NEUROLOGICAL,
            (
                "Seizure control. Do not stop abruptly before procedures.",
                "للتحكم في التشنجات. لا يوقف فجأة قبل الإجراءات.",
            ),
            ("500mg q12h", "500 مجم كل 12 ساعة"),
        ),
        // Antiemetics
        drug(
            "ae1",
            "Ondansetron",
            &["Zofran", "Danset"],
            ANTIEMETIC,
            (
                "Post-operative nausea. QT prolongation risk.",
                "للغثيان بعد الجراحة. خطر إطالة فترة QT.",
            ),
            ("4-8mg q8h", "4-8 مجم كل 8 ساعات"),
        ),
        drug(
            "ae2",
            "Metoclopramide",
            &["Primperan"],
            ANTIEMETIC,
            (
                "Nausea/vomiting. Extrapyramidal effects in children.",
                "للغثيان والقيء. أعراض خارج هرمية عند الأطفال.",
            ),
            ("10mg q8h", "10 مجم كل 8 ساعات"),
        ),
        drug(
            "ae3",
            "Domperidone",
            &["Motilium"],
            ANTIEMETIC,
            (
                "Nausea. Fewer central side effects.",
                "للغثيان. أعراض جانبية مركزية أقل.",
            ),
            ("10mg q8h", "10 مجم كل 8 ساعات"),
        ),
        // Antifungals
        drug(
            "af1",
            "Nystatin",
            &["Mycostatin", "Nystatin EIPICO"],
            ANTIFUNGAL,
            (
                "Oral candidiasis. Swish and spit/swallow.",
                "للفطريات الفموية. يمسح أو يمضمض.",
            ),
            ("100,000 IU 4x/day", "100,000 وحدة 4 مرات يومياً"),
        ),
        drug(
            "af2",
            "Miconazole",
            &["Daktarin Gel", "Miconaz"],
            ANTIFUNGAL,
            (
                "Oral gel. Warning: Warfarin interaction.",
                "جل فموي. تحذير: تفاعل مع الوارفارين.",
            ),
            ("2.5ml 4x/day", "2.5 مل 4 مرات يومياً"),
        ),
        drug(
            "af3",
            "Fluconazole",
            &["Diflucan"],
            ANTIFUNGAL,
            ("Systemic for chronic cases.", "للحالات المزمنة."),
            ("50mg daily", "50 مجم يومياً"),
        ),
        // Antiseptics
        drug(
            "as1",
            "Chlorhexidine 0.12%",
            &["Corsodyl", "Orovex"],
            ANTISEPTIC,
            (
                "Gold standard for gingivitis. Stains teeth.",
                "الأفضل للثة. يصبغ الأسنان بعد أسبوعين.",
            ),
            ("Rinse bid", "مضمضة مرتين يومياً"),
        ),
        drug(
            "as2",
            "Povidone-Iodine",
            &["Betadine"],
            ANTISEPTIC,
            (
                "Pre-op antiseptic. Iodine allergy risk.",
                "مطهر قبل الجراحة. خطر حساسية اليود.",
            ),
            ("Rinse", "مضمضة"),
        ),
        // Corticosteroids
        drug(
            "cs1",
            "Dexamethasone",
            &["Epidron", "Dexamethasone"],
            ("Corticosteroid", "كورتيزون"),
            (
                "For severe swelling. Avoid in diabetics.",
                "للتورم الشديد. تجنب في مرضى السكري.",
            ),
            ("4-8mg pre-op", "4-8 مجم قبل الجراحة"),
        ),
        // Emergency
        drug(
            "em1",
            "Epinephrine 1:1000",
            &["Adrenaline"],
            EMERGENCY,
            (
                "For Anaphylaxis. 0.3-0.5mg IM.",
                "لصدمة الحساسية. 0.3-0.5 مجم عضل.",
            ),
            ("0.3-0.5mg IM", "0.3-0.5 مجم عضل"),
        ),
        drug(
            "em2",
            "Hydrocortisone",
            &["Solu-Cortef"],
            EMERGENCY,
            (
                "For shock/severe allergic reaction.",
                "للصدمة والحساسية الشديدة.",
            ),
            ("100mg IV", "100 مجم وريد"),
        ),
        // Other
        drug(
            "ot1",
            "Alvogyl",
            &["Alvogyl", "Septodont"],
            ("Dry Socket", "سنخ جاف"),
            (
                "Instantly relieves dry socket pain.",
                "يخفف ألم السنخ الجاف فوراً.",
            ),
            ("Local app", "تطبيق موضعي"),
        ),
        drug(
            "ot2",
            "Tranexamic Acid",
            &["Kapron", "Cyklokapron"],
            ("Hemostatic", "وقف النزيف"),
            ("For bleeding. Local or systemic.", "للنزيف. موضعي أو جهازي."),
            ("500mg", "500 مجم"),
        ),
    ]
}
