use crate::error::{CipherError, Result};
use crate::params::Direction;

/// Rail Fence transposition.
///
/// Characters are written in a zigzag across `rails` rows and read off row
/// by row. Fails with `InvalidRails` when `rails < 2`. Texts that have no
/// more characters than rails are returned unchanged.
pub fn rail_fence(text: &str, rails: usize, direction: Direction) -> Result<String> {
    if rails < 2 {
        return Err(CipherError::InvalidRails(rails));
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= rails {
        return Ok(text.to_string());
    }

    Ok(match direction {
        Direction::Encode => encode(&chars, rails),
        Direction::Decode => decode(&chars, rails),
    })
}

fn encode(chars: &[char], rails: usize) -> String {
    let mut fence: Vec<Vec<char>> = vec![Vec::new(); rails];
    for (&c, row) in chars.iter().zip(zigzag(rails)) {
        fence[row].push(c);
    }
    fence.into_iter().flatten().collect()
}

/// Decoding recomputes the zigzag pattern, fills it row-major with the
/// ciphertext, then reads it back in zigzag order.
fn decode(chars: &[char], rails: usize) -> String {
    // Mark: row of every plaintext position
    let pattern: Vec<usize> = zigzag(rails).take(chars.len()).collect();

    // Fill: each row takes the next run of ciphertext, top row first
    let mut fence: Vec<&[char]> = Vec::with_capacity(rails);
    let mut rest = chars;
    for row in 0..rails {
        let len = pattern.iter().filter(|&&r| r == row).count();
        let (head, tail) = rest.split_at(len);
        fence.push(head);
        rest = tail;
    }

    // Read: walk the zigzag again, consuming each row in order
    let mut cursors = vec![0usize; rails];
    pattern
        .into_iter()
        .map(|row| {
            let c = fence[row][cursors[row]];
            cursors[row] += 1;
            c
        })
        .collect()
}

/// Endless sequence of row indices `0, 1, .., rails-1, rails-2, .., 1, 0, 1, ..`
fn zigzag(rails: usize) -> impl Iterator<Item = usize> {
    let mut row = 0usize;
    let mut down = true;
    std::iter::from_fn(move || {
        let current = row;
        if down {
            row += 1;
        } else {
            row -= 1;
        }
        if row == 0 || row == rails - 1 {
            down = !down;
        }
        Some(current)
    })
}
