//! Localized content bundles.
//!
//! Content is plain data: one [`ContentBundle`] per [`Language`], holding every
//! user-facing label plus a pure generator for the provisioning console script.
//! Nothing here reads or mutates workflow state.

use crate::Language;

/// Placeholder substituted in plural templates.
const COUNT_PLACEHOLDER: &str = "{count}";

/// Every user-facing string for one language.
#[derive(Debug, Clone, Copy)]
pub struct ContentBundle {
    pub language: Language,

    // Header / navigation
    pub brand: &'static str,
    pub nav_home: &'static str,
    pub nav_cart: &'static str,

    // Catalog view
    pub hero_title: &'static str,
    pub hero_description: &'static str,
    pub get_brainrots_button: &'static str,
    pub go_to_cart_button: &'static str,
    pub selection_title: &'static str,
    pub pro_tip_label: &'static str,
    pub pro_tip_text: &'static str,
    pub search_placeholder: &'static str,
    pub search_not_found: &'static str,
    pub add_to_cart: &'static str,
    pub added_to_cart: &'static str,
    pub cart_limit_reached: &'static str,
    pub footer_text: &'static str,

    // Toast
    pub toast_item_added: &'static str,
    pub toast_go_to_cart: &'static str,

    // Cart view
    pub cart_title: &'static str,
    pub empty_cart_title: &'static str,
    pub empty_cart_text: &'static str,
    pub get_items_now_one: &'static str,
    pub get_items_now_other: &'static str,
    pub remove_item: &'static str,

    // Confirmation modal
    pub modal_title: &'static str,
    pub modal_text: &'static str,
    /// Substrings of `modal_text` rendered emphasized.
    pub modal_highlights: &'static [&'static str],
    pub modal_button_countdown: &'static str,
    pub modal_button: &'static str,
    pub modal_cancel: &'static str,

    // Provisioning console
    pub console_window_title: &'static str,
    pub transfer_success_title: &'static str,
    pub transfer_success_text: &'static str,
    pub join_server_button: &'static str,
    pub destination_copied: &'static str,
    pub destination_shown: &'static str,

    script: fn(&str, usize) -> Vec<String>,
}

impl ContentBundle {
    /// Console script for a provisioning run over `item_names` (already joined) and `count` items.
    ///
    /// Pure: the same inputs always produce the same lines.
    #[must_use]
    pub fn console_lines(&self, item_names: &str, count: usize) -> Vec<String> {
        (self.script)(item_names, count)
    }

    /// Checkout button label: singular for one item, plural template otherwise.
    #[must_use]
    pub fn checkout_label(&self, count: usize) -> String {
        if count == 1 {
            self.get_items_now_one.to_string()
        } else {
            self.get_items_now_other
                .replace(COUNT_PLACEHOLDER, &count.to_string())
        }
    }

    /// Confirm button label while the countdown is still running, e.g. `Please wait (3s)`.
    #[must_use]
    pub fn countdown_label(&self, remaining: u32) -> String {
        format!("{} ({remaining}s)", self.modal_button_countdown)
    }

    /// Split `modal_text` into `(segment, highlighted)` runs.
    #[must_use]
    pub fn modal_segments(&self) -> Vec<(&'static str, bool)> {
        split_highlights(self.modal_text, self.modal_highlights)
    }
}

/// Look up the bundle for a language.
#[must_use]
pub fn content(language: Language) -> &'static ContentBundle {
    match language {
        Language::En => &EN,
        Language::Ka => &KA,
    }
}

fn split_highlights(
    text: &'static str,
    terms: &'static [&'static str],
) -> Vec<(&'static str, bool)> {
    let mut segments = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let next = terms
            .iter()
            .filter(|term| !term.is_empty())
            .filter_map(|term| rest.find(term).map(|pos| (pos, *term)))
            .min_by_key(|(pos, term)| (*pos, std::cmp::Reverse(term.len())));

        match next {
            Some((pos, term)) => {
                if pos > 0 {
                    segments.push((&rest[..pos], false));
                }
                segments.push((&rest[pos..pos + term.len()], true));
                rest = &rest[pos + term.len()..];
            }
            None => {
                segments.push((rest, false));
                break;
            }
        }
    }

    segments
}

// ============================================================================
// English
// ============================================================================

fn en_script(item_names: &str, count: usize) -> Vec<String> {
    let units = if count == 1 { "unit" } else { "units" };
    vec![
        "Initializing Moreira transfer protocol v2.4...".to_string(),
        "Connecting to private server cluster...".to_string(),
        "Connection established.".to_string(),
        "Authenticating session token...".to_string(),
        format!("Locating requested {units}: {item_names}"),
        format!("Packaging {count} {units} for transfer..."),
        "Bypassing duplication checks...".to_string(),
        "Injecting into server inventory...".to_string(),
        "Verifying inventory integrity...".to_string(),
        "Finalizing transfer...".to_string(),
        format!("Transfer complete. {count} {units} delivered."),
    ]
}

static EN: ContentBundle = ContentBundle {
    language: Language::En,
    brand: "OP Moreira Method",
    nav_home: "Home",
    nav_cart: "Cart",
    hero_title: "OP Moreira Method",
    hero_description: "Get the rarest brainrots for free. Pick your units, confirm, and they land on your private server.",
    get_brainrots_button: "Get Brainrots",
    go_to_cart_button: "Go to Cart",
    selection_title: "The Selection",
    pro_tip_label: "Pro tip:",
    pro_tip_text: "Only the rarest units work with this method. Choose wisely.",
    search_placeholder: "Search brainrots...",
    search_not_found: "No brainrots match your search.",
    add_to_cart: "Add to Cart",
    added_to_cart: "Added",
    cart_limit_reached: "Cart limit reached",
    footer_text: "Not affiliated with Roblox. Units are delivered in-game.",
    toast_item_added: "Item added to cart!",
    toast_go_to_cart: "Go to Cart",
    cart_title: "Your Cart",
    empty_cart_title: "Your cart is empty",
    empty_cart_text: "Head back to the selection and grab some brainrots.",
    get_items_now_one: "Get Item Now",
    get_items_now_other: "Get {count} Items Now",
    remove_item: "Remove",
    modal_title: "Before you continue",
    modal_text: "This method only works for rare and op brainrots. Stay here until the transfer finishes.",
    modal_highlights: &["rare", "op"],
    modal_button_countdown: "Please wait",
    modal_button: "I understand, continue",
    modal_cancel: "Cancel",
    console_window_title: "moreira-transfer.sh",
    transfer_success_title: "Transfer Successful!",
    transfer_success_text: "Join the private server to claim your brainrots.",
    join_server_button: "Join Server",
    destination_copied: "Server link copied to clipboard",
    destination_shown: "Server link",
    script: en_script,
};

// ============================================================================
// Georgian
// ============================================================================

fn ka_script(item_names: &str, count: usize) -> Vec<String> {
    vec![
        "მორეირას გადაცემის პროტოკოლი v2.4 იტვირთება...".to_string(),
        "მიმდინარეობს პრივატულ სერვერთან დაკავშირება...".to_string(),
        "კავშირი დამყარებულია.".to_string(),
        "სესიის ტოკენის ავთენტიფიკაცია...".to_string(),
        format!("მოთხოვნილი ერთეულების ძებნა: {item_names}"),
        format!("{count} ერთეულის მომზადება გადასაცემად..."),
        "დუბლირების შემოწმებების გვერდის ავლა...".to_string(),
        "სერვერის ინვენტარში ჩასმა...".to_string(),
        "ინვენტარის მთლიანობის შემოწმება...".to_string(),
        "გადაცემის დასრულება...".to_string(),
        format!("გადაცემა დასრულდა. მიწოდებულია {count} ერთეული."),
    ]
}

static KA: ContentBundle = ContentBundle {
    language: Language::Ka,
    brand: "OP მორეირა მეთოდი",
    nav_home: "მთავარი",
    nav_cart: "კალათა",
    hero_title: "OP მორეირა მეთოდი",
    hero_description: "მიიღე ყველაზე იშვიათი ბრეინროტები უფასოდ. აირჩიე, დაადასტურე და ისინი შენს პრივატულ სერვერზე გამოჩნდებიან.",
    get_brainrots_button: "მიიღე ბრეინროტები",
    go_to_cart_button: "კალათაში გადასვლა",
    selection_title: "არჩევანი",
    pro_tip_label: "რჩევა:",
    pro_tip_text: "ამ მეთოდით მხოლოდ ყველაზე იშვიათი ერთეულები მუშაობს. აირჩიე გონივრულად.",
    search_placeholder: "მოძებნე ბრეინროტი...",
    search_not_found: "ძიების შედეგად ვერაფერი მოიძებნა.",
    add_to_cart: "კალათაში დამატება",
    added_to_cart: "დამატებულია",
    cart_limit_reached: "კალათის ლიმიტი ამოწურულია",
    footer_text: "არ არის დაკავშირებული Roblox-თან. ერთეულები მიიწოდება თამაშში.",
    toast_item_added: "ნივთი დაემატა კალათას!",
    toast_go_to_cart: "კალათაში",
    cart_title: "შენი კალათა",
    empty_cart_title: "კალათა ცარიელია",
    empty_cart_text: "დაბრუნდი არჩევანზე და აიღე ბრეინროტები.",
    get_items_now_one: "მიიღე ნივთი ახლავე",
    get_items_now_other: "მიიღე {count} ნივთი ახლავე",
    remove_item: "წაშლა",
    modal_title: "სანამ გააგრძელებ",
    modal_text: "ეს მეთოდი მუშაობს მხოლოდ იშვიათი და მაგარი ბრეინროტებისთვის. დარჩი აქ, სანამ გადაცემა დასრულდება.",
    modal_highlights: &["იშვიათი", "მაგარი"],
    modal_button_countdown: "გთხოვთ, დაელოდოთ",
    modal_button: "გასაგებია, გაგრძელება",
    modal_cancel: "გაუქმება",
    console_window_title: "moreira-transfer.sh",
    transfer_success_title: "გადაცემა წარმატებულია!",
    transfer_success_text: "შეუერთდი პრივატულ სერვერს და მიიღე შენი ბრეინროტები.",
    join_server_button: "სერვერზე შესვლა",
    destination_copied: "სერვერის ბმული დაკოპირდა",
    destination_shown: "სერვერის ბმული",
    script: ka_script,
};
