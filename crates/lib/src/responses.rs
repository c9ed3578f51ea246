//! Canned reply catalog used when the SupportAgent API is unreachable.
//!
//! Free-text input is bucketed into a category by case-insensitive keyword
//! search, then one of the category's fixed reply variants is picked at
//! random. The category check order is fixed and significant: an input can
//! match several categories, and the first listed match wins.

use rand::Rng;

/// Keyword-derived bucket selecting which canned reply set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCategory {
    Password,
    Subscription,
    Account,
    Cancel,
    Default,
}

impl ResponseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Password => "password",
            ResponseCategory::Subscription => "subscription",
            ResponseCategory::Account => "account",
            ResponseCategory::Cancel => "cancel",
            ResponseCategory::Default => "default",
        }
    }
}

/// Checked in order; first category with a matching keyword wins.
const CATEGORY_KEYWORDS: &[(ResponseCategory, &[&str])] = &[
    (ResponseCategory::Password, &["password", "reset", "login"]),
    (
        ResponseCategory::Subscription,
        &["subscription", "plan", "upgrade", "billing"],
    ),
    (
        ResponseCategory::Account,
        &["account", "access", "cannot", "can't"],
    ),
    (ResponseCategory::Cancel, &["cancel", "unsubscribe", "stop"]),
];

/// Bucket free-text input into a reply category.
pub fn classify(input: &str) -> ResponseCategory {
    let lower = input.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *category;
        }
    }
    ResponseCategory::Default
}

/// The canned reply variants for a category.
pub fn variants(category: ResponseCategory) -> &'static [&'static str] {
    match category {
        ResponseCategory::Password => PASSWORD_REPLIES,
        ResponseCategory::Subscription => SUBSCRIPTION_REPLIES,
        ResponseCategory::Account => ACCOUNT_REPLIES,
        ResponseCategory::Cancel => CANCEL_REPLIES,
        ResponseCategory::Default => DEFAULT_REPLIES,
    }
}

/// Pick one of the category's variants uniformly at random. The rng is
/// injected so tests can pin the outcome with a seeded generator.
pub fn pick<R: Rng + ?Sized>(category: ResponseCategory, rng: &mut R) -> &'static str {
    let options = variants(category);
    options[rng.random_range(0..options.len())]
}

const PASSWORD_REPLIES: &[&str] = &[
    "I can help you reset your password! Here's how:\n\n\
     1. Go to the login page\n\
     2. Click 'Forgot Password?'\n\
     3. Enter your email address\n\
     4. Check your email for reset instructions\n\
     5. Follow the link to create a new password\n\n\
     If you don't receive the email within 5 minutes, please check your spam folder. \
     Would you like me to help with anything else?",
    "To reset your password securely:\n\n\
     🔐 **Quick Reset Steps:**\n\
     • Visit our password reset page\n\
     • Enter your registered email\n\
     • Click the verification link sent to your email\n\
     • Create a strong new password\n\n\
     **Security Tips:**\n\
     • Use a mix of letters, numbers, and symbols\n\
     • Make it at least 12 characters long\n\
     • Don't reuse old passwords\n\n\
     Need help with anything else?",
];

const SUBSCRIPTION_REPLIES: &[&str] = &[
    "Here are our current subscription plans:\n\n\
     💎 **Premium Plan** - $29/month\n\
     • Unlimited support requests\n\
     • Priority response (< 1 hour)\n\
     • Advanced AI features\n\
     • Custom integrations\n\n\
     ⭐ **Standard Plan** - $15/month\n\
     • Up to 100 support requests/month\n\
     • Standard response time (< 24 hours)\n\
     • Basic AI features\n\n\
     🆓 **Free Plan** - $0/month\n\
     • Up to 10 support requests/month\n\
     • Community support\n\n\
     Would you like to upgrade or learn more about any specific plan?",
    "Our subscription options are designed to fit your needs:\n\n\
     **🚀 Enterprise** - Custom pricing\n\
     • Unlimited everything\n\
     • Dedicated account manager\n\
     • Custom SLA agreements\n\
     • White-label options\n\n\
     **🏢 Business** - $99/month\n\
     • Up to 10 team members\n\
     • Advanced analytics\n\
     • API access\n\
     • Integration support\n\n\
     **👤 Individual** - $19/month\n\
     • Personal use\n\
     • Standard features\n\
     • Email support\n\n\
     Interested in a specific plan? I can help you get started!",
];

const ACCOUNT_REPLIES: &[&str] = &[
    "I understand you're having trouble accessing your account. Let me help you troubleshoot:\n\n\
     🔍 **Common Solutions:**\n\n\
     **Password Issues:**\n\
     • Try the 'Forgot Password' option\n\
     • Check if Caps Lock is on\n\
     • Clear browser cache and cookies\n\n\
     **Email Verification:**\n\
     • Check if your email is verified\n\
     • Look for verification emails in spam\n\n\
     **Account Status:**\n\
     • Ensure your subscription is active\n\
     • Check for any security holds\n\n\
     If none of these work, I can escalate this to our technical team. \
     What specific error are you seeing?",
    "Account access issues can be frustrating! Let's get this sorted:\n\n\
     **🛠️ Diagnostic Steps:**\n\n\
     **Step 1:** Verify your login credentials\n\
     • Username/email correct?\n\
     • Password entered correctly?\n\n\
     **Step 2:** Check account status\n\
     • Is your subscription active?\n\
     • Any recent password changes?\n\n\
     **Step 3:** Technical check\n\
     • Clear browser data\n\
     • Try a different device or network\n\
     • Disable VPN if using one\n\n\
     **🚨 If urgent:** I can create a temporary access link for you while we resolve the main issue.\n\n\
     What's the exact error message you're seeing when trying to log in?",
];

const CANCEL_REPLIES: &[&str] = &[
    "I'm sorry to hear you're considering canceling your subscription. Before we proceed, \
     let me see if I can help address any concerns:\n\n\
     **💭 Common reasons for cancellation:**\n\
     • Not using all features\n\
     • Too expensive\n\
     • Technical issues\n\
     • Changed needs\n\n\
     **📋 If you still want to cancel:**\n\
     1. Go to Account Settings\n\
     2. Click 'Subscription'\n\
     3. Select 'Cancel Subscription'\n\
     4. Follow the prompts\n\n\
     **⏰ Important notes:**\n\
     • You'll keep access until your billing cycle ends\n\
     • We offer a 30-day grace period for reactivation\n\
     • All your data will be preserved for 90 days\n\n\
     Would you like to discuss what's not working for you, or shall I proceed with cancellation steps?",
    "I understand you want to cancel your subscription. Let me make this process smooth for you:\n\n\
     **🎯 Quick Cancellation Process:**\n\n\
     1. Account → Billing → Cancel Subscription\n\
     2. Confirm your cancellation reason\n\
     3. You'll receive a confirmation email\n\n\
     **What happens next:**\n\
     • Service continues until your billing cycle ends\n\
     • No future charges\n\
     • Data export available for 90 days\n\
     • Easy reactivation if you change your mind\n\n\
     **🎁 Before you go:**\n\
     • Would a 50% discount for 3 months help?\n\
     • Or maybe switching to our free plan?\n\
     • We also have a pause option (up to 6 months)\n\n\
     Shall I process the cancellation or explore alternatives?",
];

const DEFAULT_REPLIES: &[&str] = &[
    "Thank you for reaching out! I'm here to help with any questions about your account, \
     subscriptions, technical issues, or general support.\n\n\
     **I can assist with:**\n\
     • 🔐 Password resets and login issues\n\
     • 💳 Billing and subscription management\n\
     • 🛠️ Technical troubleshooting\n\
     • 📞 Account settings and preferences\n\
     • 🎯 Feature explanations and tutorials\n\n\
     Could you please provide more details about what you need help with today?",
    "Hello! I'm your AI support assistant, ready to help!\n\n\
     **✨ How I can help you today:**\n\n\
     🔧 **Technical Support**\n\
     • Troubleshoot issues\n\
     • Configuration help\n\
     • Performance optimization\n\n\
     💼 **Account Management**\n\
     • Subscription changes\n\
     • Billing inquiries\n\
     • Security settings\n\n\
     📚 **Information & Guidance**\n\
     • Feature tutorials\n\
     • Best practices\n\
     • FAQ answers\n\n\
     What would you like assistance with? Feel free to be as specific as possible!",
    "Great question! I'm here to provide intelligent support using advanced AI capabilities.\n\n\
     **🤖 My AI Features:**\n\
     • **Contextual Understanding:** I remember our conversation\n\
     • **Smart Search:** I can find relevant information quickly\n\
     • **Risk Assessment:** I identify when issues need escalation\n\
     • **Personalized Help:** Tailored to your account and needs\n\n\
     **🎯 Popular topics I help with:**\n\
     • Account access and security\n\
     • Subscription and billing questions\n\
     • Technical troubleshooting\n\
     • Feature requests and feedback\n\n\
     What specific topic can I help you explore today?",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn password_keywords_classify_to_password() {
        for input in [
            "I forgot my password",
            "please RESET my credentials",
            "trouble with Login",
        ] {
            assert_eq!(classify(input), ResponseCategory::Password, "{input}");
        }
    }

    #[test]
    fn category_order_is_fixed() {
        // "cancel" and "password" both match; password is checked first.
        assert_eq!(
            classify("I want to cancel because I lost my password"),
            ResponseCategory::Password
        );
        // "stop" alone lands in cancel.
        assert_eq!(classify("please stop emailing me"), ResponseCategory::Cancel);
    }

    #[test]
    fn subscription_and_account_keywords() {
        assert_eq!(classify("which plan is best?"), ResponseCategory::Subscription);
        assert_eq!(classify("billing question"), ResponseCategory::Subscription);
        assert_eq!(classify("I can't get in"), ResponseCategory::Account);
        assert_eq!(classify("no access to my Account"), ResponseCategory::Account);
    }

    #[test]
    fn unmatched_input_is_default() {
        assert_eq!(classify("hello there"), ResponseCategory::Default);
        assert_eq!(classify(""), ResponseCategory::Default);
    }

    #[test]
    fn every_category_has_variants() {
        for category in [
            ResponseCategory::Password,
            ResponseCategory::Subscription,
            ResponseCategory::Account,
            ResponseCategory::Cancel,
            ResponseCategory::Default,
        ] {
            assert!(!variants(category).is_empty(), "{:?}", category);
        }
    }

    #[test]
    fn pick_is_deterministic_with_seeded_rng() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..8 {
            assert_eq!(
                pick(ResponseCategory::Default, &mut a),
                pick(ResponseCategory::Default, &mut b)
            );
        }
    }

    #[test]
    fn pick_returns_a_member_of_the_category() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = variants(ResponseCategory::Password);
        for _ in 0..16 {
            let choice = pick(ResponseCategory::Password, &mut rng);
            assert!(options.contains(&choice));
        }
    }
}
