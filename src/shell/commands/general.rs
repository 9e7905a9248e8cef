//! General shell commands - help text.

/// Displays help information about available commands.
pub fn help() -> String {
    "**Leafline Help**\n\
    **Browse**\n\
    • `list [featured|price-low|price-high|newest|rating]` - All plants.\n\
    • `top` / `trendy` - Top selling and trendy plants.\n\
    • `categories` - Shop by category.\n\
    • `category <tag>` - Plants in a category (e.g., `category succulent`).\n\
    • `show <id>` - Product details.\n\
    • `search <text>` - Search names, descriptions and categories.\n\n\
    **Cart**\n\
    • `add <id> [qty]` - Add to cart.\n\
    • `remove <id>` - Remove from cart.\n\
    • `qty <id> <n>` / `inc <id>` / `dec <id>` - Change quantities.\n\
    • `cart` - Show your cart and total.\n\
    • `clear` - Empty your cart.\n\n\
    **Other**\n\
    • `contact <name>|<email>|<subject>|<message>` - Send us a message.\n\
    • `help` - Shows this help message.\n\
    • `quit` - Leave the shop."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_every_command() {
        let text = help();
        for command in [
            "list", "top", "trendy", "categories", "category", "show", "search", "add",
            "remove", "qty", "inc", "dec", "cart", "clear", "contact", "quit",
        ] {
            assert!(text.contains(&format!("`{command}")), "help is missing {command}");
        }
    }
}
