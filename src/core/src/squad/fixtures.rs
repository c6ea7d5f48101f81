use crate::{Player, PlayerPositionType, PlayerStats};
use std::str::FromStr;

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    position: &str,
    rating: f64,
    country: &str,
    club: &str,
    age: u8,
    stats: [u8; 6],
    price: f64,
    height: u16,
) -> Player {
    let [pace, shooting, passing, dribbling, defending, physical] = stats;
    let mut player = Player::new(
        id,
        name,
        PlayerPositionType::from_str(position).unwrap(),
        rating,
        PlayerStats::new(pace, shooting, passing, dribbling, defending, physical),
        price,
        height,
    );
    player.country = country.to_string();
    player.club = club.to_string();
    player.age = age;
    player
}

/// The 23-player reference pool, in its canonical order.
pub fn reference_players() -> Vec<Player> {
    vec![
        player("1", "Lionel Messi", "RW", 91.0, "Argentina", "Inter Miami", 36, [85, 92, 91, 95, 34, 65], 45.0, 170),
        player("2", "Kylian Mbappé", "ST", 92.0, "France", "Real Madrid", 25, [97, 89, 80, 92, 36, 77], 180.0, 178),
        player("3", "Kevin De Bruyne", "CAM", 91.0, "Belgium", "Manchester City", 32, [76, 86, 93, 88, 64, 78], 85.0, 181),
        player("4", "Virgil van Dijk", "CB", 90.0, "Netherlands", "Liverpool", 32, [77, 60, 71, 72, 91, 86], 75.0, 193),
        player("5", "Alisson Becker", "GK", 89.0, "Brazil", "Liverpool", 31, [50, 13, 82, 48, 39, 90], 55.0, 193),
        player("6", "Erling Haaland", "ST", 91.0, "Norway", "Manchester City", 23, [89, 91, 65, 80, 45, 88], 170.0, 194),
        player("7", "Thibaut Courtois", "GK", 90.0, "Belgium", "Real Madrid", 31, [45, 11, 75, 41, 35, 89], 60.0, 199),
        player("8", "Joshua Kimmich", "CDM", 89.0, "Germany", "Bayern Munich", 29, [70, 74, 88, 84, 84, 79], 70.0, 177),
        player("9", "Trent Alexander-Arnold", "RB", 87.0, "England", "Liverpool", 25, [76, 66, 89, 76, 76, 71], 65.0, 180),
        player("10", "Luka Modrić", "CM", 87.0, "Croatia", "Real Madrid", 38, [74, 76, 89, 90, 72, 65], 35.0, 172),
        player("11", "Marquinhos", "CB", 88.0, "Brazil", "PSG", 29, [78, 48, 75, 77, 88, 82], 55.0, 183),
        player("12", "Bruno Fernandes", "CAM", 88.0, "Portugal", "Manchester United", 29, [75, 85, 89, 84, 68, 77], 65.0, 179),
        player("13", "Alphonso Davies", "LB", 86.0, "Canada", "Bayern Munich", 23, [96, 62, 77, 83, 76, 83], 50.0, 183),
        player("14", "Rodri", "CDM", 91.0, "Spain", "Manchester City", 27, [62, 72, 79, 74, 87, 88], 90.0, 191),
        player("15", "Rúben Dias", "CB", 88.0, "Portugal", "Manchester City", 26, [62, 40, 67, 67, 88, 84], 65.0, 187),
        player("16", "Marc-André ter Stegen", "GK", 89.0, "Germany", "Barcelona", 31, [54, 10, 88, 50, 40, 87], 58.0, 187),
        player("17", "Casemiro", "CDM", 87.0, "Brazil", "Manchester United", 31, [64, 73, 75, 72, 87, 90], 50.0, 185),
        player("18", "Vinícius Júnior", "LW", 90.0, "Brazil", "Real Madrid", 23, [95, 83, 79, 92, 29, 61], 140.0, 176),
        player("19", "Antonio Rüdiger", "CB", 87.0, "Germany", "Real Madrid", 30, [82, 55, 73, 70, 86, 86], 55.0, 190),
        player("20", "Federico Valverde", "CM", 88.0, "Uruguay", "Real Madrid", 25, [84, 81, 81, 83, 75, 85], 75.0, 182),
        player("21", "Kyle Walker", "RB", 85.0, "England", "Manchester City", 33, [90, 61, 70, 75, 82, 79], 35.0, 183),
        player("22", "Theo Hernández", "LB", 86.0, "France", "AC Milan", 26, [93, 75, 77, 81, 78, 84], 60.0, 184),
        player("23", "Ederson", "GK", 89.0, "Brazil", "Manchester City", 30, [54, 22, 93, 48, 41, 88], 62.0, 188),
    ]
}

pub fn reference_player(id: &str) -> Player {
    reference_players()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap()
}

/// Reference pool without any midfielders.
pub fn pool_without_midfielders() -> Vec<Player> {
    reference_players()
        .into_iter()
        .filter(|p| !p.position.is_midfielder())
        .collect()
}

/// Outfield filler players, enough to keep the bench off the goalkeeper
/// fallback.
pub fn outfield_depth(count: usize) -> Vec<Player> {
    const POSITIONS: [&str; 4] = ["CB", "CM", "ST", "RB"];

    (0..count)
        .map(|i| {
            player(
                &format!("d{}", i),
                &format!("Depth Player {}", i),
                POSITIONS[i % POSITIONS.len()],
                70.0 + (i % 10) as f64,
                "Testland",
                "Test FC",
                24,
                [60, 60, 60, 60, 60, 60],
                5.0,
                180,
            )
        })
        .collect()
}
