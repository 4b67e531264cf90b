//! Greeting and general-fallback reply pools.

use crate::language::Language;

/// Canned replies keyed by language. Each side is a non-empty ordered list.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePool {
    pub en: &'static [&'static str],
    pub sw: &'static [&'static str],
}

impl LanguagePool {
    pub fn for_language(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.en,
            Language::Sw => self.sw,
        }
    }

    /// Both language sides hold at least one reply.
    pub fn is_complete(&self) -> bool {
        !self.en.is_empty() && !self.sw.is_empty()
    }
}

/// Replies to an opening greeting.
pub static GREETINGS: LanguagePool = LanguagePool {
    en: &[
        "Hello! 👋 Welcome to JengaBiz Assistant. I'm here to help you with your business financial planning and growth strategies.\n\nHow can I assist you today? Feel free to ask about:\n• Budgeting and financial management\n• Pricing your products or services\n• Managing cash flow\n• Growing your business\n\nWhat would you like to know?",
        "Jambo! 🌟 I'm your JengaBiz business advisor. I'm excited to help you build and grow your business!\n\nI can provide guidance on budgeting, pricing, cash flow, and growth strategies. What's on your mind today?",
    ],
    sw: &[
        "Habari! 👋 Karibu JengaBiz Assistant. Niko hapa kukusaidia na mipango yako ya kifedha ya biashara na mikakati ya ukuaji.\n\nNinaweza kukusaidiaje leo? Jisikie huru kuuliza kuhusu:\n• Bajeti na usimamizi wa kifedha\n• Bei ya bidhaa au huduma zako\n• Kusimamia mtiririko wa fedha\n• Kukuza biashara yako\n\nUngependa kujua nini?",
        "Jambo! 🌟 Mimi ni mshauri wako wa biashara wa JengaBiz. Nimefurahi kukusaidia kujenga na kukuza biashara yako!\n\nNinaweza kutoa mwongozo juu ya bajeti, bei, mtiririko wa fedha, na mikakati ya ukuaji. Kuna nini akilini mwako leo?",
    ],
};

/// Fallback replies when neither a greeting nor a topic matched.
pub static GENERAL_RESPONSES: LanguagePool = LanguagePool {
    en: &[
        "That's a great question! As a business advisor, I'm here to help you with:\n\n• **Budgeting & Financial Planning**: Managing your money effectively\n• **Pricing Strategies**: Setting the right prices for profitability\n• **Cash Flow Management**: Keeping your business financially healthy\n• **Growth Strategies**: Scaling your business sustainably\n\nCould you tell me more about your specific situation? For example:\n- What type of business do you run?\n- What's your biggest challenge right now?\n- What are you hoping to achieve?\n\nThe more details you share, the better I can help!",
        "I'm here to support your business journey! Let me help you with practical advice on:\n\n✓ Creating and managing budgets\n✓ Developing pricing strategies\n✓ Improving cash flow\n✓ Planning for growth\n\nTo give you the most relevant advice, could you share:\n- Your business type or industry?\n- Your current challenge or goal?\n- Any specific numbers or context?\n\nDon't worry if you're just starting out - I'm here to help at every stage!",
    ],
    sw: &[
        "Hilo ni swali zuri! Kama mshauri wa biashara, niko hapa kukusaidia na:\n\n• **Bajeti na Mipango ya Kifedha**: Kusimamia fedha zako kwa ufanisi\n• **Mikakati ya Bei**: Kuweka bei sahihi kwa faida\n• **Usimamizi wa Mtiririko wa Fedha**: Kuweka biashara yako yenye afya ya kifedha\n• **Mikakati ya Ukuaji**: Kupanda biashara yako kwa kudumu\n\nUnaweza kuniambia zaidi kuhusu hali yako maalum? Kwa mfano:\n- Unafanya aina gani ya biashara?\n- Changamoto yako kubwa sasa ni nini?\n- Unataka kufikia nini?\n\nKadri unavyoshiriki maelezo zaidi, ndivyo nitakavyoweza kukusaidia vizuri zaidi!",
        "Niko hapa kusaidia safari yako ya biashara! Hebu nikusaidie na ushauri wa vitendo juu ya:\n\n✓ Kuunda na kusimamia bajeti\n✓ Kuendeleza mikakati ya bei\n✓ Kuboresha mtiririko wa fedha\n✓ Kupanga ukuaji\n\nKukupa ushauri unaofaa zaidi, unaweza kushiriki:\n- Aina yako ya biashara au tasnia?\n- Changamoto yako ya sasa au lengo?\n- Nambari zozote maalum au muktadha?\n\nUsijali ikiwa unaanza tu - niko hapa kusaidia katika kila hatua!",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_complete() {
        assert!(GREETINGS.is_complete());
        assert!(GENERAL_RESPONSES.is_complete());
        assert_eq!(GREETINGS.en.len(), 2);
        assert_eq!(GENERAL_RESPONSES.sw.len(), 2);
    }

    #[test]
    fn test_no_empty_replies() {
        for pool in [&GREETINGS, &GENERAL_RESPONSES] {
            for reply in pool.en.iter().chain(pool.sw.iter()) {
                assert!(!reply.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_for_language() {
        assert!(GREETINGS.for_language(Language::Sw)[0].starts_with("Habari!"));
        assert!(GREETINGS.for_language(Language::En)[0].starts_with("Hello!"));
    }
}
