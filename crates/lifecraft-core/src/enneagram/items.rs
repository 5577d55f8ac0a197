//! Screener and instinct item banks. Item ids and their type keys are the
//! same in every language; only the wording differs.

use super::{Instinct, Locale};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerItem {
    pub id: &'static str,
    pub enneagram_type: u8,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstinctItem {
    pub id: &'static str,
    pub instinct: Instinct,
    pub text: &'static str,
}

pub fn screener_items(locale: Locale) -> &'static [ScreenerItem] {
    match locale {
        Locale::En => &SCREENER_EN,
        Locale::Kr => &SCREENER_KR,
    }
}

pub fn instinct_items(locale: Locale) -> &'static [InstinctItem] {
    match locale {
        Locale::En => &INSTINCTS_EN,
        Locale::Kr => &INSTINCTS_KR,
    }
}

/// Type keyed by a screener item id.
pub(super) fn screener_type(item_id: &str) -> Option<u8> {
    SCREENER_EN
        .iter()
        .find(|item| item.id == item_id)
        .map(|item| item.enneagram_type)
}

pub(super) fn instinct_of(item_id: &str) -> Option<Instinct> {
    INSTINCTS_EN
        .iter()
        .find(|item| item.id == item_id)
        .map(|item| item.instinct)
}

const fn s(id: &'static str, enneagram_type: u8, text: &'static str) -> ScreenerItem {
    ScreenerItem {
        id,
        enneagram_type,
        text,
    }
}

const fn i(id: &'static str, instinct: Instinct, text: &'static str) -> InstinctItem {
    InstinctItem { id, instinct, text }
}

static SCREENER_EN: [ScreenerItem; 45] = [
    s("s1_01", 1, "I always try to meet moral and ethical standards."),
    s("s1_02", 1, "I constantly check whether my actions are right and fair."),
    s("s1_03", 1, "I want to make the world a better place."),
    s("s1_04", 1, "I strongly dislike making mistakes or having my shortcomings exposed."),
    s("s1_05", 1, "Pursuing perfection is important to me."),
    s("s1_06", 2, "I enjoy helping others."),
    s("s1_07", 2, "I have a strong desire to be loved by others."),
    s("s1_08", 2, "I feel satisfaction when someone needs me."),
    s("s1_09", 2, "I try to strengthen relationships by helping others."),
    s("s1_10", 2, "I fear being unloved or not needed."),
    s("s1_11", 3, "I always set goals and strive to achieve them."),
    s("s1_12", 3, "It is important to present a socially successful image."),
    s("s1_13", 3, "I want to be respected by others."),
    s("s1_14", 3, "I fear failing or appearing incompetent."),
    s("s1_15", 3, "I value achievement and image management highly."),
    s("s1_16", 4, "I want to feel that I am a special and unique person."),
    s("s1_17", 4, "Deep and intense emotions are important in my life."),
    s("s1_18", 4, "Feeling ordinary is very uncomfortable for me."),
    s("s1_19", 4, "I strive to express my own uniqueness."),
    s("s1_20", 4, "Finding my true self is one of the most important goals in my life."),
    s("s1_21", 5, "I enjoy learning and exploring new knowledge."),
    s("s1_22", 5, "I want to live an independent and self-sufficient life."),
    s("s1_23", 5, "I fear my energy and resources being depleted."),
    s("s1_24", 5, "I tend to think deeply about understanding how the world works."),
    s("s1_25", 5, "I try to protect myself through knowledge."),
    s("s1_26", 6, "I always seek trustworthy structures and stable environments."),
    s("s1_27", 6, "I try to be loyal to the community I belong to."),
    s("s1_28", 6, "I always want to prepare for potential future risks."),
    s("s1_29", 6, "I fear being betrayed or put in danger."),
    s("s1_30", 6, "Safety and trust are my most important values."),
    s("s1_31", 7, "I always seek new experiences and interesting opportunities."),
    s("s1_32", 7, "I try to avoid pain and discomfort in life."),
    s("s1_33", 7, "I prefer positive and enjoyable environments."),
    s("s1_34", 7, "I value freedom and variety highly."),
    s("s1_35", 7, "I feel uncomfortable when life feels boring or limiting."),
    s("s1_36", 8, "I believe maintaining power and autonomy is important."),
    s("s1_37", 8, "I strongly protect the rights of my people and my own rights."),
    s("s1_38", 8, "I want to avoid situations where I lack control."),
    s("s1_39", 8, "I fear exposing my vulnerabilities."),
    s("s1_40", 8, "I want to exert influence as a strong leader."),
    s("s1_41", 9, "I always try to maintain inner and outer peace."),
    s("s1_42", 9, "Avoiding conflict and forming harmonious relationships is important."),
    s("s1_43", 9, "I try to avoid unnecessary friction as much as possible."),
    s("s1_44", 9, "I tend to adapt to my environment and find stability."),
    s("s1_45", 9, "I fear being ignored or considered unimportant."),
];

static SCREENER_KR: [ScreenerItem; 45] = [
    s("s1_01", 1, "나는 항상 도덕적이고 윤리적인 기준을 충족하려고 노력한다."),
    s("s1_02", 1, "나의 행동이 옳고 공정한지를 계속해서 점검한다."),
    s("s1_03", 1, "세상을 더 나은 곳으로 만들고 싶다."),
    s("s1_04", 1, "나는 실수하거나 부족함이 드러나는 것을 매우 싫어한다."),
    s("s1_05", 1, "완벽함을 추구하는 것이 내게 중요하다."),
    s("s1_06", 2, "나는 다른 사람을 돕는 것을 즐겨한다."),
    s("s1_07", 2, "타인으로부터 사랑받고 싶다는 욕구가 크다."),
    s("s1_08", 2, "내가 누군가에게 필요하다는 느낌을 받을 때 만족감을 느낀다."),
    s("s1_09", 2, "타인에게 도움을 줌으로써 관계를 강화하려고 노력한다."),
    s("s1_10", 2, "사랑받지 못하거나 필요하지 않은 존재가 되는 것이 두렵다."),
    s("s1_11", 3, "나는 항상 목표를 설정하고 그것을 달성하려 노력한다."),
    s("s1_12", 3, "사회적으로 성공적인 이미지를 보여주는 것이 중요하다."),
    s("s1_13", 3, "나는 타인에게 존경받기를 원한다."),
    s("s1_14", 3, "나는 실패하거나 무능력하다는 인상을 주는 것을 두려워한다."),
    s("s1_15", 3, "나는 성과와 이미지 관리를 중요하게 여긴다."),
    s("s1_16", 4, "나는 내가 특별하고 독창적인 존재라고 느끼고 싶다."),
    s("s1_17", 4, "깊고 강렬한 감정이 내 삶에서 중요하다."),
    s("s1_18", 4, "평범하게 느껴지는 것이 매우 불편하다."),
    s("s1_19", 4, "나만의 독창성을 표현하려고 노력한다."),
    s("s1_20", 4, "나는 진정한 자아를 찾는 것이 삶에서 가장 중요한 목표 중 하나다."),
    s("s1_21", 5, "나는 새로운 지식을 배우고 탐구하는 것을 좋아한다."),
    s("s1_22", 5, "스스로 독립적이고 자급자족하는 삶을 살고 싶다."),
    s("s1_23", 5, "나의 에너지와 자원이 고갈되는 것이 두렵다."),
    s("s1_24", 5, "세상의 원리를 이해하려고 깊이 생각하는 편이다."),
    s("s1_25", 5, "지식을 통해 나 자신을 보호하려고 노력한다."),
    s("s1_26", 6, "나는 항상 신뢰할 수 있는 구조와 안정된 환경을 찾는다."),
    s("s1_27", 6, "내가 속한 공동체에 충실하려고 노력한다."),
    s("s1_28", 6, "미래에 일어날 수 있는 위험을 항상 대비하고 싶다."),
    s("s1_29", 6, "나는 배신당하거나 위험에 처하는 것을 두려워한다."),
    s("s1_30", 6, "안전과 신뢰가 나에게 가장 중요한 가치이다."),
    s("s1_31", 7, "나는 항상 새로운 경험과 흥미로운 기회를 찾는다."),
    s("s1_32", 7, "삶의 고통과 불편함을 피하려고 노력한다."),
    s("s1_33", 7, "긍정적이고 즐거운 환경을 선호한다."),
    s("s1_34", 7, "나는 자유와 다양성을 매우 중요하게 여긴다."),
    s("s1_35", 7, "삶이 지루하거나 제한적이라고 느끼면 불편하다."),
    s("s1_36", 8, "나는 힘과 자율성을 유지하는 것이 중요하다고 생각한다."),
    s("s1_37", 8, "내 사람들의 권리와 나의 권리를 강력하게 보호하려고 한다."),
    s("s1_38", 8, "통제권을 가지지 못하는 상황을 피하고 싶다."),
    s("s1_39", 8, "나는 자신의 취약점을 노출하는 것이 두렵다."),
    s("s1_40", 8, "나는 강력한 리더로서 영향력을 행사하고 싶다."),
    s("s1_41", 9, "나는 항상 내적·외적 평화를 유지하려고 노력한다."),
    s("s1_42", 9, "갈등을 피하고 조화로운 관계를 형성하는 것이 중요하다."),
    s("s1_43", 9, "나는 불필요한 마찰을 최대한 피하려고 한다."),
    s("s1_44", 9, "주어진 환경에 순응하며 안정감을 찾는 편이다."),
    s("s1_45", 9, "내가 무시당하거나 중요하지 않은 존재로 여겨지는 것이 두렵다."),
];

static INSTINCTS_EN: [InstinctItem; 12] = [
    i("i_01", Instinct::Sp, "I continuously optimize my daily resources (time, money, energy)."),
    i("i_02", Instinct::So, "I notice shifts in group mood and adjust my role."),
    i("i_03", Instinct::Sx, "I pursue compelling connections/projects with strong intensity."),
    i("i_04", Instinct::Sx, "I express myself more boldly with a trusted few than with groups."),
    i("i_05", Instinct::Sp, "I feel settled when practical needs are handled first."),
    i("i_06", Instinct::So, "I think in terms of \"we\": how we function together."),
    i("i_07", Instinct::Sp, "I curate environments that feel safe and replenishing."),
    i("i_08", Instinct::So, "I track status, influence, or positioning in groups."),
    i("i_09", Instinct::Sx, "I'm energized by deep, focused exchanges over breadth."),
    i("i_10", Instinct::Sp, "I plan around comfort, maintenance, and reliability."),
    i("i_11", Instinct::So, "I naturally host, convene, or coordinate people."),
    i("i_12", Instinct::Sx, "I follow sparks even if it means narrowing focus."),
];

static INSTINCTS_KR: [InstinctItem; 12] = [
    i("i_01", Instinct::Sp, "저는 일상 자원을(시간, 돈, 에너지) 지속적으로 최적화합니다."),
    i("i_02", Instinct::So, "그룹 분위기의 변화를 알아차리고 제 역할을 조정합니다."),
    i("i_03", Instinct::Sx, "강하게 끌리는 연결/프로젝트를 높은 집중도로 추구합니다."),
    i("i_04", Instinct::Sx, "신뢰하는 소수와 함께일 때 더 대담하게 표현합니다."),
    i("i_05", Instinct::Sp, "실용적 필요가 먼저 해결되면 마음이 안정됩니다."),
    i("i_06", Instinct::So, "“우리” 관점으로 함께 어떻게 기능하는지 생각합니다."),
    i("i_07", Instinct::Sp, "안전하고 회복되는 환경을 만드는 데 신경 씁니다."),
    i("i_08", Instinct::So, "그룹 내 지위, 영향력, 위치 변화를 살핉니다."),
    i("i_09", Instinct::Sx, "넓이보다 깊고 집중된 교류에서 에너지를 얻습니다."),
    i("i_10", Instinct::Sp, "편안함, 유지관리, 신뢰성을 기준으로 계획합니다."),
    i("i_11", Instinct::So, "자연스럽게 사람들을 모으고 조정하는 편입니다."),
    i("i_12", Instinct::Sx, "집중을 좁히더라도 “불꽃”을 따라갑니다."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banks_are_well_formed() {
        for locale in [Locale::En, Locale::Kr] {
            let screener = screener_items(locale);
            assert_eq!(screener.len(), 45);
            for (n, item) in screener.iter().enumerate() {
                assert_eq!(item.id, format!("s1_{:02}", n + 1));
                assert_eq!(item.enneagram_type as usize, n / 5 + 1);
            }
            let instincts = instinct_items(locale);
            assert_eq!(instincts.len(), 12);
            for instinct in [Instinct::Sp, Instinct::So, Instinct::Sx] {
                assert_eq!(instincts.iter().filter(|i| i.instinct == instinct).count(), 4);
            }
        }
    }

    #[test]
    fn korean_bank_shares_ids_and_keys() {
        let en = screener_items(Locale::En);
        let kr = screener_items(Locale::Kr);
        for (a, b) in en.iter().zip(kr) {
            assert_eq!((a.id, a.enneagram_type), (b.id, b.enneagram_type));
            assert_ne!(a.text, b.text);
        }
        assert!(kr[0].text.starts_with("나는"));

        for (a, b) in instinct_items(Locale::En).iter().zip(instinct_items(Locale::Kr)) {
            assert_eq!((a.id, a.instinct), (b.id, b.instinct));
        }
    }

    #[test]
    fn lookups_by_id() {
        assert_eq!(screener_type("s1_45"), Some(9));
        assert_eq!(screener_type("i_01"), None);
        assert_eq!(instinct_of("i_03"), Some(Instinct::Sx));
        assert_eq!(instinct_of("s1_01"), None);
    }
}
