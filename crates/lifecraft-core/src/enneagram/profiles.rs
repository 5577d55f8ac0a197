//! Reference profiles for the nine types.

use super::{Instinct, Locale};
use crate::error::{LifecraftError, Result};
use serde::Serialize;

/// A string carried in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub ko: &'static str,
}

impl Text {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Kr => self.ko,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traits {
    pub en: &'static [&'static str],
    pub ko: &'static [&'static str],
}

impl Traits {
    pub fn get(&self, locale: Locale) -> &'static [&'static str] {
        match locale {
            Locale::En => self.en,
            Locale::Kr => self.ko,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtypes {
    pub sp: Text,
    pub so: Text,
    pub sx: Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProfile {
    pub enneagram_type: u8,
    pub name: Text,
    pub nickname: Text,
    pub description: Text,
    pub core_motivation: Text,
    pub core_fear: Text,
    pub core_desire: Text,
    /// Type a healthy person moves toward.
    pub growth_direction: u8,
    /// Type a person under stress takes on.
    pub stress_direction: u8,
    pub healthy_traits: Traits,
    pub unhealthy_traits: Traits,
    pub subtypes: Subtypes,
    /// Description of the wing on the lower-numbered side (1 wraps to 9).
    pub left_wing: Text,
    /// Description of the wing on the higher-numbered side (9 wraps to 1).
    pub right_wing: Text,
}

/// A profile flattened into one language for API and CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedProfile {
    pub enneagram_type: u8,
    pub name: &'static str,
    pub nickname: &'static str,
    pub description: &'static str,
    pub core_motivation: &'static str,
    pub core_fear: &'static str,
    pub core_desire: &'static str,
    pub growth_direction: u8,
    pub stress_direction: u8,
    pub healthy_traits: &'static [&'static str],
    pub unhealthy_traits: &'static [&'static str],
    pub wings: [u8; 2],
}

impl TypeProfile {
    /// `[left, right]` neighbours on the circle.
    pub fn wings(&self) -> [u8; 2] {
        adjacent_types(self.enneagram_type)
    }

    pub fn subtype(&self, instinct: Instinct) -> Text {
        match instinct {
            Instinct::Sp => self.subtypes.sp,
            Instinct::So => self.subtypes.so,
            Instinct::Sx => self.subtypes.sx,
        }
    }

    /// Description of `wing`, or `None` when it is not adjacent to this type.
    pub fn wing(&self, wing: u8) -> Option<Text> {
        let [left, right] = self.wings();
        if wing == left {
            Some(self.left_wing)
        } else if wing == right {
            Some(self.right_wing)
        } else {
            None
        }
    }

    pub fn localized(&self, locale: Locale) -> LocalizedProfile {
        LocalizedProfile {
            enneagram_type: self.enneagram_type,
            name: self.name.get(locale),
            nickname: self.nickname.get(locale),
            description: self.description.get(locale),
            core_motivation: self.core_motivation.get(locale),
            core_fear: self.core_fear.get(locale),
            core_desire: self.core_desire.get(locale),
            growth_direction: self.growth_direction,
            stress_direction: self.stress_direction,
            healthy_traits: self.healthy_traits.get(locale),
            unhealthy_traits: self.unhealthy_traits.get(locale),
            wings: self.wings(),
        }
    }
}

fn adjacent_types(enneagram_type: u8) -> [u8; 2] {
    let left = if enneagram_type == 1 { 9 } else { enneagram_type - 1 };
    let right = if enneagram_type == 9 { 1 } else { enneagram_type + 1 };
    [left, right]
}

pub fn profile(enneagram_type: u8) -> Option<&'static TypeProfile> {
    PROFILES.iter().find(|p| p.enneagram_type == enneagram_type)
}

pub fn profiles() -> &'static [TypeProfile] {
    &PROFILES
}

/// Parse a type number from user input and return its profile.
pub fn lookup(raw: &str) -> Result<&'static TypeProfile> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(profile)
        .ok_or_else(|| LifecraftError::InvalidEnneagramType(raw.to_string()))
}

pub fn wing_description(enneagram_type: u8, wing: u8, locale: Locale) -> Result<&'static str> {
    let profile = profile(enneagram_type)
        .ok_or_else(|| LifecraftError::InvalidEnneagramType(enneagram_type.to_string()))?;
    profile
        .wing(wing)
        .map(|text| text.get(locale))
        .ok_or(LifecraftError::InvalidWing {
            enneagram_type,
            wing,
        })
}

pub fn subtype_description(
    enneagram_type: u8,
    instinct: Instinct,
    locale: Locale,
) -> Result<&'static str> {
    let profile = profile(enneagram_type)
        .ok_or_else(|| LifecraftError::InvalidEnneagramType(enneagram_type.to_string()))?;
    Ok(profile.subtype(instinct).get(locale))
}

const fn text(en: &'static str, ko: &'static str) -> Text {
    Text { en, ko }
}

static PROFILES: [TypeProfile; 9] = [
    TypeProfile {
        enneagram_type: 1,
        name: text(
            "The Reformer",
            "개혁가",
        ),
        nickname: text(
            "The Perfectionist",
            "완벽주의자",
        ),
        description: text(
            "Principled, purposeful, self-controlled, and perfectionistic. Ones are conscientious and ethical, with a strong sense of right and wrong. They are teachers, crusaders, and advocates for change.",
            "원칙적이고, 목적의식이 강하며, 자기 통제력이 있고, 완벽주의적입니다. 1유형은 양심적이고 윤리적이며, 옳고 그름에 대한 강한 의식을 가지고 있습니다.",
        ),
        core_motivation: text(
            "To be right, to strive higher and improve everything, to be consistent with their ideals, to justify themselves, to be beyond criticism.",
            "올바르게 되고, 더 높이 노력하고 모든 것을 개선하며, 이상과 일관성을 유지하고, 비판을 넘어서고자 합니다.",
        ),
        core_fear: text(
            "Being corrupt, evil, defective, or imperfect",
            "부패하거나, 악하거나, 결함이 있거나, 불완전한 것",
        ),
        core_desire: text(
            "To be good, to have integrity, to be balanced",
            "선하고, 진실되며, 균형 잡힌 사람이 되는 것",
        ),
        growth_direction: 7,
        stress_direction: 4,
        healthy_traits: Traits {
            en: &["Wise", "Discerning", "Realistic", "Noble", "Morally heroic"],
            ko: &["지혜로운", "분별력 있는", "현실적인", "고귀한", "도덕적으로 영웅적인"],
        },
        unhealthy_traits: Traits {
            en: &["Judgmental", "Inflexible", "Dogmatic", "Obsessive-compulsive", "Punitive"],
            ko: &["비판적인", "융통성 없는", "독단적인", "강박적인", "처벌적인"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation One: Focuses on being correct and proper, often worried about material security and doing things \"the right way.\"",
                "자기보존 1유형: 올바르고 적절하게 되는 것에 집중하며, 물질적 안정과 \"올바른 방식\"으로 일하는 것에 대해 걱정합니다.",
            ),
            so: text(
                "Social One: Focused on being a role model and teaching others the right way. Often seen as the \"social reformer.\"",
                "사회적 1유형: 롤모델이 되고 다른 사람들에게 올바른 길을 가르치는 것에 집중합니다. \"사회 개혁가\"로 여겨집니다.",
            ),
            sx: text(
                "Sexual One: More intense and passionate about their ideals. Desires perfect intimate relationships and can be zealous reformers.",
                "성적 1유형: 자신의 이상에 대해 더 강렬하고 열정적입니다. 완벽한 친밀한 관계를 원하며 열정적인 개혁가가 될 수 있습니다.",
            ),
        },
        left_wing: text(
            "1w9: More idealistic and detached, combining perfectionism with a desire for peace. Calmer but can be more stubborn.",
            "1w9: 더 이상주의적이고 초연하며, 완벽주의와 평화에 대한 욕구를 결합합니다. 더 차분하지만 더 완고할 수 있습니다.",
        ),
        right_wing: text(
            "1w2: More people-oriented and helpful. Combines reform with service to others. Warmer but can be more critical.",
            "1w2: 더 사람 중심적이고 도움이 됩니다. 개혁과 타인에 대한 봉사를 결합합니다. 더 따뜻하지만 더 비판적일 수 있습니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 2,
        name: text(
            "The Helper",
            "조력자",
        ),
        nickname: text(
            "The Giver",
            "베푸는 자",
        ),
        description: text(
            "Generous, demonstrative, people-pleasing, and possessive. Twos are empathetic, sincere, and warm-hearted. They are friendly, generous, and self-sacrificing.",
            "관대하고, 표현적이며, 사람을 기쁘게 하고, 소유욕이 있습니다. 2유형은 공감적이고, 진실되며, 따뜻합니다.",
        ),
        core_motivation: text(
            "To be loved, to express feelings for others, to be needed and appreciated, to get others to respond to them.",
            "사랑받고, 다른 사람들에 대한 감정을 표현하며, 필요하고 감사받고, 다른 사람들이 반응하게 하는 것.",
        ),
        core_fear: text(
            "Being unwanted, unworthy of being loved",
            "원치 않거나, 사랑받을 가치가 없는 것",
        ),
        core_desire: text(
            "To feel loved and appreciated",
            "사랑받고 감사받는 것을 느끼는 것",
        ),
        growth_direction: 4,
        stress_direction: 8,
        healthy_traits: Traits {
            en: &["Unconditionally loving", "Humble", "Altruistic", "Nurturing", "Empathetic"],
            ko: &["무조건적으로 사랑하는", "겸손한", "이타적인", "양육하는", "공감하는"],
        },
        unhealthy_traits: Traits {
            en: &["Manipulative", "Possessive", "Self-deceptive", "Coercive", "Entitled"],
            ko: &["조종적인", "소유욕이 강한", "자기기만적인", "강압적인", "자격이 있다고 느끼는"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Two: More childlike and cute, seeks security through being lovable. Often the \"Me First\" type among Twos.",
                "자기보존 2유형: 더 어린아이 같고 귀여우며, 사랑스러움을 통해 안정을 추구합니다.",
            ),
            so: text(
                "Social Two: Focused on being influential and powerful through relationships. Often seeks positions of leadership.",
                "사회적 2유형: 관계를 통해 영향력 있고 강력해지는 것에 집중합니다. 종종 리더십 위치를 추구합니다.",
            ),
            sx: text(
                "Sexual Two: The most seductive and emotionally intense. Seeks deep one-on-one connections and can be very romantic.",
                "성적 2유형: 가장 매혹적이고 감정적으로 강렬합니다. 깊은 일대일 연결을 추구하며 매우 로맨틱할 수 있습니다.",
            ),
        },
        left_wing: text(
            "2w1: More idealistic and principled. Combines helpfulness with a sense of duty. Can be critical while helping.",
            "2w1: 더 이상주의적이고 원칙적입니다. 도움과 의무감을 결합합니다.",
        ),
        right_wing: text(
            "2w3: More ambitious and image-conscious. Combines helping with achieving. Often seeks recognition for their service.",
            "2w3: 더 야심차고 이미지를 의식합니다. 돕는 것과 성취를 결합합니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 3,
        name: text(
            "The Achiever",
            "성취자",
        ),
        nickname: text(
            "The Performer",
            "수행자",
        ),
        description: text(
            "Adaptable, excelling, driven, and image-conscious. Threes are self-assured, attractive, and charming. Ambitious, competent, and energetic.",
            "적응력 있고, 탁월하며, 추진력 있고, 이미지를 의식합니다. 3유형은 자신감 있고, 매력적이며, 매혹적입니다.",
        ),
        core_motivation: text(
            "To be affirmed, to distinguish themselves from others, to have attention, to be admired, and to impress others.",
            "인정받고, 다른 사람들과 구별되며, 주목받고, 존경받고, 다른 사람들에게 인상을 주는 것.",
        ),
        core_fear: text(
            "Being worthless or without inherent value",
            "가치 없거나 본질적인 가치가 없는 것",
        ),
        core_desire: text(
            "To feel valuable and worthwhile",
            "가치 있고 보람 있다고 느끼는 것",
        ),
        growth_direction: 6,
        stress_direction: 9,
        healthy_traits: Traits {
            en: &["Authentic", "Self-accepting", "Inner-directed", "Charitable", "Genuine role models"],
            ko: &["진정한", "자기 수용적인", "내면 지향적인", "자선적인", "진정한 롤모델"],
        },
        unhealthy_traits: Traits {
            en: &["Deceptive", "Narcissistic", "Hostile", "Exploitative", "Opportunistic"],
            ko: &["기만적인", "자기도취적인", "적대적인", "착취적인", "기회주의적인"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Three: Focused on material success and security. Works hard to create a comfortable, successful life.",
                "자기보존 3유형: 물질적 성공과 안정에 집중합니다. 편안하고 성공적인 삶을 만들기 위해 열심히 일합니다.",
            ),
            so: text(
                "Social Three: Focused on social status and prestige. Wants to be seen as successful in the eyes of others.",
                "사회적 3유형: 사회적 지위와 명성에 집중합니다. 다른 사람들의 눈에 성공적으로 보이기를 원합니다.",
            ),
            sx: text(
                "Sexual Three: Focused on being attractive and desirable. Wants to be seen as the ideal partner or person.",
                "성적 3유형: 매력적이고 바람직하게 보이는 것에 집중합니다. 이상적인 파트너나 사람으로 보이기를 원합니다.",
            ),
        },
        left_wing: text(
            "3w2: More charming and people-oriented. Combines achievement with helping others. Often very charismatic.",
            "3w2: 더 매력적이고 사람 중심적입니다. 성취와 타인 돕기를 결합합니다. 종종 매우 카리스마 있습니다.",
        ),
        right_wing: text(
            "3w4: More introspective and artistic. Combines achievement with authenticity. Can be more emotionally sensitive.",
            "3w4: 더 내성적이고 예술적입니다. 성취와 진정성을 결합합니다. 더 감정적으로 민감할 수 있습니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 4,
        name: text(
            "The Individualist",
            "개인주의자",
        ),
        nickname: text(
            "The Romantic",
            "낭만주의자",
        ),
        description: text(
            "Expressive, dramatic, self-absorbed, and temperamental. Fours are self-aware, sensitive, and reserved. They are emotionally honest, creative, and personal.",
            "표현적이고, 극적이며, 자기몰입적이고, 변덕스럽습니다. 4유형은 자아 인식이 높고, 민감하며, 내성적입니다.",
        ),
        core_motivation: text(
            "To express themselves and their individuality, to create and surround themselves with beauty, to maintain certain moods and feelings.",
            "자신과 개성을 표현하고, 아름다움을 창조하고 둘러싸며, 특정 기분과 감정을 유지하는 것.",
        ),
        core_fear: text(
            "Having no identity or personal significance",
            "정체성이나 개인적 중요성이 없는 것",
        ),
        core_desire: text(
            "To find themselves and their significance",
            "자신과 자신의 중요성을 찾는 것",
        ),
        growth_direction: 1,
        stress_direction: 2,
        healthy_traits: Traits {
            en: &["Creative", "Inspired", "Self-renewing", "Compassionate", "Introspective"],
            ko: &["창의적인", "영감 받은", "자기 갱신적인", "자비로운", "내성적인"],
        },
        unhealthy_traits: Traits {
            en: &["Self-pitying", "Envious", "Melancholic", "Alienated", "Tormented"],
            ko: &["자기 연민적인", "질투하는", "우울한", "소외된", "고통받는"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Four: More stoic and less openly dramatic. Often called \"counter-type\" because they suffer silently.",
                "자기보존 4유형: 더 금욕적이고 덜 공개적으로 극적입니다. 조용히 고통받기 때문에 \"반유형\"이라고 불립니다.",
            ),
            so: text(
                "Social Four: Focuses on comparing themselves to others and feeling shame or inferiority. Often feels like they do not belong.",
                "사회적 4유형: 자신을 다른 사람들과 비교하고 수치심이나 열등감을 느끼는 것에 집중합니다.",
            ),
            sx: text(
                "Sexual Four: The most intense and competitive. Expresses envy outwardly and can be demanding in relationships.",
                "성적 4유형: 가장 강렬하고 경쟁적입니다. 질투를 외적으로 표현하며 관계에서 요구적일 수 있습니다.",
            ),
        },
        left_wing: text(
            "4w3: More ambitious and image-aware. Combines individuality with a desire for success. Can be more extroverted.",
            "4w3: 더 야심차고 이미지를 인식합니다. 개성과 성공에 대한 욕구를 결합합니다.",
        ),
        right_wing: text(
            "4w5: More withdrawn and intellectual. Combines emotional depth with analytical thinking. Often more private.",
            "4w5: 더 내향적이고 지적입니다. 감정적 깊이와 분석적 사고를 결합합니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 5,
        name: text(
            "The Investigator",
            "탐구자",
        ),
        nickname: text(
            "The Observer",
            "관찰자",
        ),
        description: text(
            "Perceptive, innovative, secretive, and isolated. Fives are alert, insightful, and curious. They are able to concentrate and focus on developing complex ideas and skills.",
            "통찰력 있고, 혁신적이며, 비밀스럽고, 고립적입니다. 5유형은 경계심 있고, 통찰력 있으며, 호기심이 많습니다.",
        ),
        core_motivation: text(
            "To possess knowledge, to understand the environment, to have everything figured out as a way of defending the self.",
            "지식을 소유하고, 환경을 이해하며, 자아를 방어하는 방법으로 모든 것을 파악하는 것.",
        ),
        core_fear: text(
            "Being useless, helpless, or incapable",
            "쓸모없거나, 무력하거나, 능력이 없는 것",
        ),
        core_desire: text(
            "To be capable and competent",
            "능력 있고 유능한 것",
        ),
        growth_direction: 8,
        stress_direction: 7,
        healthy_traits: Traits {
            en: &["Visionary", "Pioneering", "Objective", "Perceptive", "Self-contained"],
            ko: &["비전 있는", "선구적인", "객관적인", "통찰력 있는", "자족적인"],
        },
        unhealthy_traits: Traits {
            en: &["Eccentric", "Nihilistic", "Isolated", "Detached", "Paranoid"],
            ko: &["괴짜의", "허무주의적인", "고립된", "초연한", "편집증적인"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Five: Most withdrawn and minimalist. Builds walls around themselves and their resources.",
                "자기보존 5유형: 가장 내향적이고 미니멀리스트입니다. 자신과 자원 주위에 벽을 쌓습니다.",
            ),
            so: text(
                "Social Five: Seeks to belong to groups with specialized knowledge. Often an expert in their field.",
                "사회적 5유형: 전문 지식을 가진 그룹에 속하기를 추구합니다. 종종 자신의 분야에서 전문가입니다.",
            ),
            sx: text(
                "Sexual Five: The most emotionally open Five. Seeks intense one-on-one connections through shared interests.",
                "성적 5유형: 가장 감정적으로 개방적인 5유형입니다. 공유된 관심사를 통해 강렬한 일대일 연결을 추구합니다.",
            ),
        },
        left_wing: text(
            "5w4: More creative and emotionally sensitive. Combines investigation with artistic expression.",
            "5w4: 더 창의적이고 감정적으로 민감합니다. 탐구와 예술적 표현을 결합합니다.",
        ),
        right_wing: text(
            "5w6: More loyal and security-oriented. Combines knowledge-seeking with practical concerns.",
            "5w6: 더 충성스럽고 안전 지향적입니다. 지식 추구와 실용적 관심사를 결합합니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 6,
        name: text(
            "The Loyalist",
            "충성가",
        ),
        nickname: text(
            "The Skeptic",
            "회의론자",
        ),
        description: text(
            "Engaging, responsible, anxious, and suspicious. Sixes are reliable, hard-working, responsible, and trustworthy. They are excellent troubleshooters.",
            "참여적이고, 책임감 있으며, 불안하고, 의심이 많습니다. 6유형은 신뢰할 수 있고, 근면하며, 책임감 있고, 믿을 만합니다.",
        ),
        core_motivation: text(
            "To have security and support, to test the attitudes of others, to fight against anxiety and insecurity.",
            "안전과 지원을 받고, 다른 사람들의 태도를 시험하며, 불안과 불안정에 맞서 싸우는 것.",
        ),
        core_fear: text(
            "Being without support or guidance",
            "지원이나 안내 없이 있는 것",
        ),
        core_desire: text(
            "To have security and support",
            "안전과 지원을 받는 것",
        ),
        growth_direction: 9,
        stress_direction: 3,
        healthy_traits: Traits {
            en: &["Courageous", "Self-affirming", "Trusting", "Reliable", "Cooperative"],
            ko: &["용감한", "자기 긍정적인", "신뢰하는", "신뢰할 수 있는", "협력적인"],
        },
        unhealthy_traits: Traits {
            en: &["Anxious", "Paranoid", "Defensive", "Divisive", "Authoritarian"],
            ko: &["불안한", "편집증적인", "방어적인", "분열적인", "권위주의적인"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Six: Most phobic and security-seeking. Looks for safety in personal warmth and alliances.",
                "자기보존 6유형: 가장 공포증적이고 안전을 추구합니다. 개인적 따뜻함과 동맹에서 안전을 찾습니다.",
            ),
            so: text(
                "Social Six: Seeks security through following rules and authorities. Often very dutiful and responsible.",
                "사회적 6유형: 규칙과 권위를 따르는 것을 통해 안전을 추구합니다. 종종 매우 의무적이고 책임감 있습니다.",
            ),
            sx: text(
                "Sexual Six: Counter-phobic, confronts fears head-on. Can be bold and intimidating to mask underlying anxiety.",
                "성적 6유형: 반공포증적이며, 두려움에 정면으로 맞섭니다. 근본적인 불안을 숨기기 위해 대담하고 위협적일 수 있습니다.",
            ),
        },
        left_wing: text(
            "6w5: More introverted and analytical. Combines loyalty with intellectual independence.",
            "6w5: 더 내향적이고 분석적입니다. 충성심과 지적 독립성을 결합합니다.",
        ),
        right_wing: text(
            "6w7: More outgoing and optimistic. Combines security-seeking with enthusiasm and adventure.",
            "6w7: 더 외향적이고 낙관적입니다. 안전 추구와 열정과 모험을 결합합니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 7,
        name: text(
            "The Enthusiast",
            "열정가",
        ),
        nickname: text(
            "The Adventurer",
            "모험가",
        ),
        description: text(
            "Spontaneous, versatile, acquisitive, and scattered. Sevens are extroverted, optimistic, versatile, and spontaneous. Playful, high-spirited, and practical.",
            "자발적이고, 다재다능하며, 획득욕이 있고, 산만합니다. 7유형은 외향적이고, 낙관적이며, 다재다능하고, 자발적입니다.",
        ),
        core_motivation: text(
            "To maintain freedom and happiness, to avoid missing out on worthwhile experiences, to keep themselves excited and occupied.",
            "자유와 행복을 유지하고, 가치 있는 경험을 놓치지 않으며, 흥분되고 바쁘게 유지하는 것.",
        ),
        core_fear: text(
            "Being deprived, trapped in pain or boredom",
            "박탈당하거나, 고통이나 지루함에 갇히는 것",
        ),
        core_desire: text(
            "To be satisfied, content, and fulfilled",
            "만족하고, 흡족하며, 성취감을 느끼는 것",
        ),
        growth_direction: 5,
        stress_direction: 1,
        healthy_traits: Traits {
            en: &["Appreciative", "Grateful", "Satisfied", "Profound", "Focused"],
            ko: &["감사하는", "고마워하는", "만족하는", "심오한", "집중된"],
        },
        unhealthy_traits: Traits {
            en: &["Scattered", "Impulsive", "Escapist", "Manic", "Self-destructive"],
            ko: &["산만한", "충동적인", "도피적인", "조증적인", "자기 파괴적인"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Seven: Focused on having enough resources and opportunities. Creates networks of practical support.",
                "자기보존 7유형: 충분한 자원과 기회를 갖는 것에 집중합니다. 실용적인 지원 네트워크를 만듭니다.",
            ),
            so: text(
                "Social Seven: Counter-type, more restrained and idealistic. Sacrifices for the group and postpones their own needs.",
                "사회적 7유형: 반유형으로, 더 절제되고 이상주의적입니다. 그룹을 위해 희생하고 자신의 필요를 미룹니다.",
            ),
            sx: text(
                "Sexual Seven: Most fantasy-oriented and idealistic. Seeks the ultimate experience and partner.",
                "성적 7유형: 가장 환상 지향적이고 이상주의적입니다. 궁극적인 경험과 파트너를 추구합니다.",
            ),
        },
        left_wing: text(
            "7w6: More relationship-oriented and loyal. Combines enthusiasm with responsibility. Can be more anxious.",
            "7w6: 더 관계 지향적이고 충성스럽습니다. 열정과 책임감을 결합합니다.",
        ),
        right_wing: text(
            "7w8: More assertive and bold. Combines enthusiasm with power and intensity. Very action-oriented.",
            "7w8: 더 단호하고 대담합니다. 열정과 권력과 강렬함을 결합합니다. 매우 행동 지향적입니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 8,
        name: text(
            "The Challenger",
            "도전자",
        ),
        nickname: text(
            "The Protector",
            "보호자",
        ),
        description: text(
            "Self-confident, decisive, willful, and confrontational. Eights are strong, assertive, resourceful, and decisive. They feel they must control their environment.",
            "자신감 있고, 결단력 있으며, 의지가 강하고, 대립적입니다. 8유형은 강하고, 단호하며, 자원이 풍부하고, 결단력 있습니다.",
        ),
        core_motivation: text(
            "To be self-reliant, to prove their strength, to resist weakness, to be important in their world, to dominate the environment.",
            "자립하고, 자신의 강함을 증명하며, 약함에 저항하고, 세상에서 중요해지며, 환경을 지배하는 것.",
        ),
        core_fear: text(
            "Being harmed or controlled by others",
            "다른 사람들에 의해 상처받거나 통제당하는 것",
        ),
        core_desire: text(
            "To protect themselves and those they care about",
            "자신과 그들이 돌보는 사람들을 보호하는 것",
        ),
        growth_direction: 2,
        stress_direction: 5,
        healthy_traits: Traits {
            en: &["Magnanimous", "Heroic", "Self-mastering", "Protective", "Empowering"],
            ko: &["관대한", "영웅적인", "자기 통제적인", "보호적인", "힘을 주는"],
        },
        unhealthy_traits: Traits {
            en: &["Dominating", "Ruthless", "Vengeful", "Destructive", "Megalomaniacal"],
            ko: &["지배적인", "무자비한", "복수심에 불타는", "파괴적인", "과대망상적인"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Eight: Most restrained Eight. Focused on survival and protecting resources. Can appear less aggressive.",
                "자기보존 8유형: 가장 절제된 8유형입니다. 생존과 자원 보호에 집중합니다. 덜 공격적으로 보일 수 있습니다.",
            ),
            so: text(
                "Social Eight: Focused on protecting groups and causes. Often seen as a protector of the underdog.",
                "사회적 8유형: 그룹과 대의를 보호하는 것에 집중합니다. 종종 약자의 보호자로 여겨집니다.",
            ),
            sx: text(
                "Sexual Eight: Most emotionally intense. Seeks to possess and control intimate relationships.",
                "성적 8유형: 가장 감정적으로 강렬합니다. 친밀한 관계를 소유하고 통제하려고 합니다.",
            ),
        },
        left_wing: text(
            "8w7: More outgoing and energetic. Combines power with enthusiasm. Very entrepreneurial.",
            "8w7: 더 외향적이고 에너지 넘칩니다. 권력과 열정을 결합합니다. 매우 기업가적입니다.",
        ),
        right_wing: text(
            "8w9: More calm and receptive. Combines strength with peacefulness. Often a \"gentle giant.\"",
            "8w9: 더 차분하고 수용적입니다. 강함과 평화로움을 결합합니다. 종종 \"부드러운 거인\"입니다.",
        ),
    },
    TypeProfile {
        enneagram_type: 9,
        name: text(
            "The Peacemaker",
            "평화주의자",
        ),
        nickname: text(
            "The Mediator",
            "중재자",
        ),
        description: text(
            "Receptive, reassuring, agreeable, and complacent. Nines are accepting, trusting, and stable. They are creative, optimistic, and supportive.",
            "수용적이고, 안심시키며, 동의적이고, 안주합니다. 9유형은 수용적이고, 신뢰하며, 안정적입니다.",
        ),
        core_motivation: text(
            "To have inner stability and peace of mind, to create harmony in their environment, to avoid conflicts and tension.",
            "내면의 안정과 마음의 평화를 갖고, 환경에서 조화를 만들며, 갈등과 긴장을 피하는 것.",
        ),
        core_fear: text(
            "Loss, separation, fragmentation",
            "상실, 분리, 분열",
        ),
        core_desire: text(
            "To have inner stability and peace of mind",
            "내면의 안정과 마음의 평화를 갖는 것",
        ),
        growth_direction: 3,
        stress_direction: 6,
        healthy_traits: Traits {
            en: &["Self-possessed", "Autonomous", "Serene", "Present", "Inclusive"],
            ko: &["침착한", "자율적인", "평온한", "현재에 집중하는", "포용적인"],
        },
        unhealthy_traits: Traits {
            en: &["Disengaged", "Neglectful", "Dissociated", "Obstinate", "Resigned"],
            ko: &["무관심한", "태만한", "해리된", "완고한", "체념한"],
        },
        subtypes: Subtypes {
            sp: text(
                "Self-Preservation Nine: Seeks comfort through physical pleasures and routines. Can be the most stubborn.",
                "자기보존 9유형: 신체적 즐거움과 루틴을 통해 편안함을 추구합니다. 가장 완고할 수 있습니다.",
            ),
            so: text(
                "Social Nine: Merges with groups and communities. Sacrifices own agenda to belong and maintain harmony.",
                "사회적 9유형: 그룹과 커뮤니티에 융합됩니다. 소속되고 조화를 유지하기 위해 자신의 의제를 희생합니다.",
            ),
            sx: text(
                "Sexual Nine: Merges with significant others. Seeks connection through being like their partner.",
                "성적 9유형: 중요한 타인과 융합됩니다. 파트너처럼 되는 것을 통해 연결을 추구합니다.",
            ),
        },
        left_wing: text(
            "9w8: More assertive and body-oriented. Combines peacemaking with strength. Can be more stubborn.",
            "9w8: 더 단호하고 신체 지향적입니다. 평화 조성과 강함을 결합합니다.",
        ),
        right_wing: text(
            "9w1: More idealistic and principled. Combines peacemaking with a sense of purpose.",
            "9w1: 더 이상주의적이고 원칙적입니다. 평화 조성과 목적의식을 결합합니다.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_profile() {
        for t in 1..=9u8 {
            let p = profile(t).unwrap();
            assert_eq!(p.enneagram_type, t);
            assert_ne!(p.growth_direction, t);
            assert_ne!(p.stress_direction, t);
            assert!(!p.healthy_traits.ko.is_empty());
        }
        assert!(profile(0).is_none());
        assert!(profile(10).is_none());
    }

    #[test]
    fn wings_wrap_around_the_circle() {
        assert_eq!(profile(1).unwrap().wings(), [9, 2]);
        assert_eq!(profile(9).unwrap().wings(), [8, 1]);

        let one_nine = wing_description(1, 9, Locale::En).unwrap();
        assert!(one_nine.starts_with("1w9"), "{one_nine}");
        let nine_one = wing_description(9, 1, Locale::Kr).unwrap();
        assert!(nine_one.starts_with("9w1"), "{nine_one}");
        assert!(wing_description(4, 3, Locale::En).unwrap().starts_with("4w3"));
    }

    #[test]
    fn non_adjacent_wing_is_rejected() {
        let err = wing_description(1, 5, Locale::En).unwrap_err();
        assert!(matches!(
            err,
            LifecraftError::InvalidWing {
                enneagram_type: 1,
                wing: 5
            }
        ));
        assert!(wing_description(12, 1, Locale::En).is_err());
    }

    #[test]
    fn subtype_and_localized_names() {
        let sp = subtype_description(1, Instinct::Sp, Locale::En).unwrap();
        assert!(sp.starts_with("Self-Preservation One"));
        let so_kr = subtype_description(6, Instinct::So, Locale::Kr).unwrap();
        assert!(so_kr.contains("6유형"), "{so_kr}");

        let view = profile(8).unwrap().localized(Locale::Kr);
        assert_eq!(view.name, "도전자");
        assert_eq!(view.growth_direction, 2);
        assert_eq!(view.stress_direction, 5);
        assert_eq!(view.wings, [7, 9]);
    }

    #[test]
    fn lookup_parses_user_input() {
        assert_eq!(lookup(" 5 ").unwrap().name.en, "The Investigator");
        assert!(matches!(
            lookup("ten"),
            Err(LifecraftError::InvalidEnneagramType(_))
        ));
        assert!(lookup("0").is_err());
    }
}
